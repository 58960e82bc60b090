//! Terminal rendering. Kept inside the binary; the library stays UI-free.

pub mod game_common;
pub mod game_scene;
pub mod loading_scene;
pub mod menu_scene;
pub mod palette;
