//! Coin shop: cosmetic unlocks and skill levels.

pub mod logic;

pub use logic::*;
