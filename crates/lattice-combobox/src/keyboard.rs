//! Mapping from raw key names to combobox events.
//!
//! Hosts forward the key name of each keydown on the input (for example the
//! DOM `KeyboardEvent.key` value). Names are trimmed and matched
//! case-insensitively.
//!
//! # Example
//!
//! ```
//! use lattice_combobox::keyboard::key_to_msg;
//! use lattice_combobox::{Msg, VerticalDirection};
//!
//! let mapped = key_to_msg::<String>(" ArrowDown ").unwrap();
//! assert_eq!(mapped.msg, Msg::PressedVerticalArrowKey(VerticalDirection::Down));
//! assert!(mapped.should_prevent_default);
//!
//! let mapped = key_to_msg::<String>("a").unwrap();
//! assert_eq!(mapped.msg, Msg::PressedKey("a".to_string()));
//! assert!(!mapped.should_prevent_default);
//! ```

use std::fmt;
use std::str::FromStr;

use lattice_combobox_core::{HorizontalDirection, Msg, VerticalDirection};

/// Error type for parsing key names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    /// The key name is empty or only whitespace.
    #[error("empty key name")]
    Empty,
}

/// A key the combobox distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Enter`.
    Enter,
    /// `Escape`.
    Escape,
    /// `Backspace`.
    Backspace,
    /// Any other key, by its trimmed name.
    Other(String),
}

impl Key {
    /// Convert to the event this key produces.
    pub fn to_msg<T>(&self) -> Msg<T> {
        match self {
            Key::ArrowUp => Msg::PressedVerticalArrowKey(VerticalDirection::Up),
            Key::ArrowDown => Msg::PressedVerticalArrowKey(VerticalDirection::Down),
            Key::ArrowLeft => Msg::PressedHorizontalArrowKey(HorizontalDirection::Left),
            Key::ArrowRight => Msg::PressedHorizontalArrowKey(HorizontalDirection::Right),
            Key::Enter => Msg::PressedEnterKey,
            Key::Escape => Msg::PressedEscapeKey,
            Key::Backspace => Msg::PressedBackspaceKey,
            Key::Other(name) => Msg::PressedKey(name.clone()),
        }
    }

    /// Whether the host should suppress its default handling of this key.
    ///
    /// Vertical arrows would move the caret and Enter would submit a
    /// surrounding form.
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown | Key::Enter)
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let key = match s.to_lowercase().as_str() {
            "arrowup" | "up" => Key::ArrowUp,
            "arrowdown" | "down" => Key::ArrowDown,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            "backspace" | "back" => Key::Backspace,
            _ => Key::Other(s.to_string()),
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Enter => f.write_str("Enter"),
            Key::Escape => f.write_str("Escape"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

/// An event produced from a key, plus the prevent-default flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardMsg<T> {
    /// The event to dispatch.
    pub msg: Msg<T>,
    /// Whether the host should suppress its default handling.
    pub should_prevent_default: bool,
}

/// Map a raw key name to an event.
pub fn key_to_msg<T>(raw: &str) -> Result<KeyboardMsg<T>, KeyParseError> {
    let key: Key = raw.parse()?;
    Ok(KeyboardMsg {
        msg: key.to_msg(),
        should_prevent_default: key.should_prevent_default(),
    })
}
