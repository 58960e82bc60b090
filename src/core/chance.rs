//! Percent-chance gating.

use super::constants::{SKILL1_LEVEL1_COIN_CHANCE, SKILL1_LEVEL2_COIN_CHANCE};
use rand::Rng;

/// Uniform draw in `0..100`.
pub fn roll_percent<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(0..100)
}

/// Whether a draw passes a gate with the given threshold.
pub fn passes(draw: u32, percent: u32) -> bool {
    draw < percent
}

/// Bernoulli trial succeeding `percent` times out of 100.
pub fn percent_chance<R: Rng>(rng: &mut R, percent: u32) -> bool {
    passes(roll_percent(rng), percent)
}

/// Coin spawn threshold for a given skill 1 level.
///
/// Only levels 1 and 2 gate the spawn; every other level spawns unconditionally.
pub fn coin_spawn_threshold(skill1_level: u8) -> u32 {
    match skill1_level {
        1 => SKILL1_LEVEL1_COIN_CHANCE,
        2 => SKILL1_LEVEL2_COIN_CHANCE,
        _ => 100,
    }
}
