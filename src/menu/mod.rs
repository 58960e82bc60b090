//! The main menu scene: navigation, shop and options.

pub mod buttons;
pub mod state;

pub use buttons::{panel_buttons, panel_category, MenuButton, MenuCommand};
pub use state::{skill_buy_visible, ItemColor, MainMenu, MenuAction, Panel};
