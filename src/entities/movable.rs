//! Shared shape of every pooled, moving entity.

use rand::Rng;

/// World-space vector. Origin at screen center, +y up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDirection {
    #[default]
    None,
    Left,
    Right,
}

/// What a collider is, as seen by triggers (recycler, player, boundaries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColliderTag {
    Coin,
    Obstacle,
    Bird,
    /// Hazard halves of an obstacle; never recycled on their own.
    Enemy,
    /// Ping-pong boundary collider.
    Boundary,
    Player,
    Unknown(String),
}

/// Position, velocity and the active flag of a pooled slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub active: bool,
}

impl Body {
    pub fn integrate(&mut self, dt: f64) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
    }
}

/// An entity kind that lives in a [`Pool`](super::Pool).
pub trait Movable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn tag(&self) -> ColliderTag;

    /// Put the entity back at its spawn column with a fresh random height.
    fn teleport_to_spawn<R: Rng>(&mut self, rng: &mut R);

    /// Set velocity for a direction. Kinds log and ignore directions they don't support.
    fn move_in(&mut self, direction: MoveDirection);

    /// Reset state when the pool activates this slot.
    fn on_enable<R: Rng>(&mut self, rng: &mut R);

    /// Advance one physics step.
    fn step(&mut self, dt: f64) {
        self.body_mut().integrate(dt);
    }

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn set_active(&mut self, active: bool) {
        self.body_mut().active = active;
    }

    fn position(&self) -> Vec2 {
        self.body().position
    }

    fn velocity(&self) -> Vec2 {
        self.body().velocity
    }
}

/// Random height in `[-range, range]`.
pub(crate) fn random_height<R: Rng>(rng: &mut R, range: f64) -> f64 {
    if range <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-range..=range)
}
