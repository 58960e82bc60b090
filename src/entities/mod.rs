//! Pooled movable entities: coins, obstacles and ambient birds.

pub mod bird;
pub mod coin;
pub mod movable;
pub mod obstacle;
pub mod pool;
pub mod recycler;

pub use bird::{Bird, BIRD_CHAT_MESSAGES};
pub use coin::Coin;
pub use movable::{Body, ColliderTag, MoveDirection, Movable, Vec2};
pub use obstacle::Obstacle;
pub use pool::Pool;
pub use recycler::Recycler;
