//! Core timing, tuning and gating primitives shared by the game and menu.

pub mod chance;
pub mod constants;
pub mod daynight;
pub mod difficulty;
pub mod fps;
pub mod scheduler;

pub use chance::{coin_spawn_threshold, passes, percent_chance, roll_percent};
pub use daynight::{DayNightCycle, Rgb};
pub use difficulty::{Difficulty, DifficultyPreset, KindConfig};
pub use fps::FpsCounter;
pub use scheduler::{Scheduler, TimerHandle};
