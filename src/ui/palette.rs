//! Terminal colors for cosmetics, the sky and menu item states.

use flappy_skies::core::Rgb;
use flappy_skies::menu::ItemColor;
use ratatui::style::Color;

const BIRD_COLORS: [Color; 8] = [
    Color::Yellow,
    Color::LightRed,
    Color::LightBlue,
    Color::LightGreen,
    Color::Magenta,
    Color::White,
    Color::Cyan,
    Color::LightMagenta,
];

/// Sky base tint per background style, modulated by the day/night color.
const BACKGROUND_TINTS: [Rgb; 8] = [
    Rgb::new(0.45, 0.75, 1.0),
    Rgb::new(1.0, 0.7, 0.45),
    Rgb::new(0.55, 0.9, 0.6),
    Rgb::new(0.8, 0.6, 1.0),
    Rgb::new(1.0, 0.55, 0.7),
    Rgb::new(0.6, 0.6, 0.65),
    Rgb::new(0.95, 0.9, 0.55),
    Rgb::new(0.4, 0.55, 0.85),
];

const OBSTACLE_COLORS: [Color; 6] = [
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::Gray,
    Color::Magenta,
    Color::Yellow,
];

/// Glyphs for the four ambient bird looks, facing left and right.
const AMBIENT_BIRD_GLYPHS: [(&str, &str); 4] = [("<", ">"), ("«", "»"), ("‹", "›"), ("◄", "►")];
const AMBIENT_BIRD_COLORS: [Color; 4] = [Color::White, Color::Gray, Color::LightCyan, Color::LightYellow];

pub fn bird_color(index: usize) -> Color {
    BIRD_COLORS[index % BIRD_COLORS.len()]
}

pub fn obstacle_color(index: usize) -> Color {
    OBSTACLE_COLORS[index % OBSTACLE_COLORS.len()]
}

pub fn background_tint(index: usize) -> Rgb {
    BACKGROUND_TINTS[index % BACKGROUND_TINTS.len()]
}

pub fn ambient_bird(variation: usize, facing_right: bool) -> (&'static str, Color) {
    let (left, right) = AMBIENT_BIRD_GLYPHS[variation % AMBIENT_BIRD_GLYPHS.len()];
    let glyph = if facing_right { right } else { left };
    (glyph, AMBIENT_BIRD_COLORS[variation % AMBIENT_BIRD_COLORS.len()])
}

pub fn rgb(color: Rgb) -> Color {
    let (r, g, b) = color.to_bytes();
    Color::Rgb(r, g, b)
}

/// Yellow for bought+selected, white for bought, grey for locked.
pub fn item_color(color: ItemColor) -> Color {
    match color {
        ItemColor::SelectedOwned => Color::Yellow,
        ItemColor::Owned => Color::White,
        ItemColor::Locked => Color::DarkGray,
    }
}
