//! Difficulty presets and the per-kind motion configs derived from them.
//!
//! A round resolves one [`Difficulty`] at start and hands each entity kind a
//! [`KindConfig`] record. Nothing about motion is kept in global state.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Round difficulty. Persisted as its ordinal (0-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Resolve a persisted ordinal. Anything outside 0-2 is not a difficulty.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn preset(self) -> DifficultyPreset {
        match self {
            Self::Easy => DifficultyPreset {
                obstacle_speed: EASY_OBSTACLE_SPEED,
                ping_pong_speed: EASY_PING_PONG_SPEED,
                coin_speed: EASY_COIN_SPEED,
                bird_speed: EASY_BIRD_SPEED,
                spawn_delay: EASY_OBSTACLE_SPAWN_DELAY,
                score_increment: EASY_SCORE_INCREMENT,
            },
            Self::Medium => DifficultyPreset {
                obstacle_speed: MEDIUM_OBSTACLE_SPEED,
                ping_pong_speed: MEDIUM_PING_PONG_SPEED,
                coin_speed: MEDIUM_COIN_SPEED,
                bird_speed: MEDIUM_BIRD_SPEED,
                spawn_delay: MEDIUM_OBSTACLE_SPAWN_DELAY,
                score_increment: MEDIUM_SCORE_INCREMENT,
            },
            Self::Hard => DifficultyPreset {
                obstacle_speed: HARD_OBSTACLE_SPEED,
                ping_pong_speed: HARD_PING_PONG_SPEED,
                coin_speed: HARD_COIN_SPEED,
                bird_speed: HARD_BIRD_SPEED,
                spawn_delay: HARD_OBSTACLE_SPAWN_DELAY,
                score_increment: HARD_SCORE_INCREMENT,
            },
        }
    }
}

/// The fixed tuple a difficulty selects for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPreset {
    pub obstacle_speed: f64,
    pub ping_pong_speed: f64,
    pub coin_speed: f64,
    pub bird_speed: f64,
    /// Obstacle and coin spawn interval in seconds.
    pub spawn_delay: f64,
    /// Score gained per score tick.
    pub score_increment: u32,
}

/// Motion parameters handed to every instance of one entity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindConfig {
    /// Horizontal speed (negative = leftwards).
    pub speed: f64,
    /// Vertical ping-pong magnitude; zero for kinds that don't oscillate.
    pub ping_pong: f64,
    pub spawn_x: f64,
    /// Spawn y is drawn uniformly from `[-spawn_y_range, spawn_y_range]`.
    pub spawn_y_range: f64,
}

impl DifficultyPreset {
    pub fn obstacle_config(&self) -> KindConfig {
        KindConfig {
            speed: self.obstacle_speed,
            ping_pong: self.ping_pong_speed,
            spawn_x: OBSTACLE_SPAWN_X,
            spawn_y_range: OBSTACLE_SPAWN_Y_RANGE,
        }
    }

    pub fn coin_config(&self) -> KindConfig {
        KindConfig {
            speed: self.coin_speed,
            ping_pong: 0.0,
            spawn_x: COIN_SPAWN_X,
            spawn_y_range: COIN_SPAWN_Y_RANGE,
        }
    }

    pub fn bird_config(&self) -> KindConfig {
        KindConfig {
            speed: self.bird_speed,
            ping_pong: 0.0,
            spawn_x: BIRD_SPAWN_X,
            spawn_y_range: BIRD_SPAWN_Y_RANGE,
        }
    }
}
