//! Flap key binding and terminal input mapping.
//!
//! Keys are stored by name ("Space", "A", "Alpha1", "LeftArrow", "F5", ...)
//! so the binding survives in the prefs store as a plain string.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, ModifierKeyCode, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::constants::DEFAULT_FLAP_KEY;

/// Keys that can never be bound to flap.
pub const DENIED_KEYS: &[&str] = &[
    "Escape",
    "Pause",
    "Print",
    "SysReq",
    "Break",
    "Numlock",
    "CapsLock",
    "ScrollLock",
];

/// Why a key could not be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRejection {
    /// The key is on the deny list (system keys, mouse buttons).
    Denied(String),
    /// The terminal reported a key with no stable name.
    Unnamed,
}

/// The configurable flap binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlapKey(String);

impl Default for FlapKey {
    fn default() -> Self {
        FlapKey(DEFAULT_FLAP_KEY.to_string())
    }
}

impl FlapKey {
    /// Accept a stored key name if it is bindable.
    pub fn parse(name: &str) -> Result<FlapKey, KeyRejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KeyRejection::Unnamed);
        }
        if is_denied(name) {
            return Err(KeyRejection::Denied(name.to_string()));
        }
        Ok(FlapKey(name.to_string()))
    }

    pub fn from_key_code(code: KeyCode) -> Result<FlapKey, KeyRejection> {
        let name = key_name(code).ok_or(KeyRejection::Unnamed)?;
        FlapKey::parse(&name)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Short form shown in the options menu.
    pub fn display_name(&self) -> String {
        format_key_name(&self.0)
    }

    pub fn matches(&self, code: KeyCode) -> bool {
        key_name(code).is_some_and(|name| name == self.0)
    }
}

pub fn is_denied(name: &str) -> bool {
    name.starts_with("Mouse") || DENIED_KEYS.contains(&name)
}

/// Shorten key names for display: Alpha1 -> A1, Keypad1 -> K1, LeftShift -> LShift,
/// RightArrow -> RArrow, BackQuote -> BQuote.
pub fn format_key_name(name: &str) -> String {
    name.replace("Alpha", "A")
        .replace("Keypad", "K")
        .replace("Left", "L")
        .replace("Right", "R")
        .replace("Back", "B")
}

/// Stable name for a terminal key code.
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase().to_string(),
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Alpha{}", c),
        KeyCode::Char(c) => punctuation_name(c)?.to_string(),
        KeyCode::Enter => "Return".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Left => "LeftArrow".to_string(),
        KeyCode::Right => "RightArrow".to_string(),
        KeyCode::Up => "UpArrow".to_string(),
        KeyCode::Down => "DownArrow".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::CapsLock => "CapsLock".to_string(),
        KeyCode::ScrollLock => "ScrollLock".to_string(),
        KeyCode::NumLock => "Numlock".to_string(),
        KeyCode::PrintScreen => "Print".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        KeyCode::Menu => "Menu".to_string(),
        KeyCode::KeypadBegin => "Keypad5".to_string(),
        KeyCode::Modifier(m) => modifier_name(m)?.to_string(),
        _ => return None,
    };
    Some(name)
}

fn punctuation_name(c: char) -> Option<&'static str> {
    let name = match c {
        '`' => "BackQuote",
        '\\' => "Backslash",
        '-' => "Minus",
        '=' => "Equals",
        '[' => "LeftBracket",
        ']' => "RightBracket",
        ';' => "Semicolon",
        '\'' => "Quote",
        ',' => "Comma",
        '.' => "Period",
        '/' => "Slash",
        '+' => "Plus",
        '*' => "Asterisk",
        _ => return None,
    };
    Some(name)
}

fn modifier_name(m: ModifierKeyCode) -> Option<&'static str> {
    let name = match m {
        ModifierKeyCode::LeftShift => "LeftShift",
        ModifierKeyCode::RightShift => "RightShift",
        ModifierKeyCode::LeftControl => "LeftControl",
        ModifierKeyCode::RightControl => "RightControl",
        ModifierKeyCode::LeftAlt => "LeftAlt",
        ModifierKeyCode::RightAlt => "RightAlt",
        _ => return None,
    };
    Some(name)
}

/// Only presses count as edges; releases and repeats reported by some terminals don't.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Left mouse button down is an alternative flap trigger.
pub fn is_flap_click(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}
