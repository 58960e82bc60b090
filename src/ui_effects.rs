//! Shared hover/click feedback for menu buttons.
//!
//! One [`UiEffects`] is built before the menu and lent to every
//! [`ButtonInteraction`] call, so buttons carry no sound or tooltip state of
//! their own.

use crate::audio::{CueQueue, SoundCue};

/// Rows the tooltip is pushed away from the pointer.
const TOOLTIP_OFFSET_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Arrow,
    Hand,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub text: String,
    pub visible: bool,
    /// Anchor cell (column, row).
    pub position: (u16, u16),
    /// Fraction of the tooltip box that sits left of / above the anchor.
    pub pivot: (f32, f32),
}

#[derive(Debug, Clone, Default)]
pub struct UiEffects {
    cursor: CursorStyle,
    tooltip: Tooltip,
    screen: (u16, u16),
    pointer: (u16, u16),
    pub cues: CueQueue,
}

impl UiEffects {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: (width, height),
            ..Self::default()
        }
    }

    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        self.screen = (width, height);
    }

    pub fn set_pointer(&mut self, column: u16, row: u16) {
        self.pointer = (column, row);
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn play_hover_sound(&mut self) {
        self.cues.push(SoundCue::UiHover);
    }

    pub fn play_click_sound(&mut self) {
        self.cues.push(SoundCue::UiClick);
    }

    pub fn set_cursor_hand(&mut self) {
        self.cursor = CursorStyle::Hand;
    }

    pub fn set_cursor_arrow(&mut self) {
        self.cursor = CursorStyle::Arrow;
    }

    pub fn set_tooltip_text(&mut self, text: &str) {
        self.tooltip.text = text.to_string();
    }

    pub fn set_tooltip_visible(&mut self, visible: bool) {
        self.tooltip.visible = visible;
    }

    /// Anchor the tooltip near the pointer, away from the nearer vertical edge,
    /// with a pivot that keeps the box on screen.
    pub fn place_tooltip(&mut self) {
        let (width, height) = (self.screen.0.max(1), self.screen.1.max(1));
        let (column, row) = self.pointer;
        let row = if row < height / 2 {
            row.saturating_add(TOOLTIP_OFFSET_ROWS).min(height - 1)
        } else {
            row.saturating_sub(TOOLTIP_OFFSET_ROWS)
        };
        self.tooltip.position = (column, row);
        self.tooltip.pivot = (
            column as f32 / width as f32,
            row as f32 / height as f32,
        );
    }
}

/// Pointer handlers for one button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonInteraction {
    pub tooltip: Option<String>,
}

impl ButtonInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tooltip(text: impl Into<String>) -> Self {
        Self {
            tooltip: Some(text.into()),
        }
    }

    pub fn on_pointer_enter(&self, fx: &mut UiEffects) {
        fx.set_cursor_hand();
        fx.play_hover_sound();
        if let Some(text) = self.tooltip.as_deref().filter(|t| !t.is_empty()) {
            fx.place_tooltip();
            fx.set_tooltip_text(text);
            fx.set_tooltip_visible(true);
        }
    }

    pub fn on_pointer_exit(&self, fx: &mut UiEffects) {
        fx.set_cursor_arrow();
        fx.set_tooltip_visible(false);
    }

    pub fn on_pointer_click(&self, fx: &mut UiEffects) {
        fx.play_click_sound();
    }

    /// The button went away while hovered.
    pub fn on_disable(&self, fx: &mut UiEffects) {
        fx.set_cursor_arrow();
        fx.set_tooltip_visible(false);
    }
}
