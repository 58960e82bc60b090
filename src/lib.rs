//! Flappy Skies - terminal arcade flyer library
//!
//! Game logic, persistence and menus, exposed for testing. Rendering lives
//! in the binary.

pub mod audio;
pub mod build_info;
pub mod core;
pub mod entities;
pub mod game;
pub mod input;
pub mod menu;
pub mod player;
pub mod progress;
pub mod scene;
pub mod shop;
pub mod ui_effects;
pub mod utils;
