//! Mapping raw user input onto engine actions.
//!
//! The engine only understands [`Action`]s. This module translates the
//! things a UI actually sees into them:
//! - keyboard key names ([`map_key`])
//! - button attributes ([`map_button`])
//! - whole keystroke scripts ([`parse_script`]), which report every
//!   unrecognized key at once instead of stopping at the first
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{Action, Operator};
//! use keycalc::input::{map_key, Modifiers};
//!
//! assert_eq!(map_key("*", Modifiers::NONE), Some(Action::Operator(Operator::Multiply)));
//! assert_eq!(map_key("Enter", Modifiers::NONE), Some(Action::Evaluate));
//! assert_eq!(map_key("5", Modifiers { ctrl: true, ..Modifiers::NONE }), None);
//! ```

pub mod error;
pub mod script;

pub use error::{KeyError, ScriptError};
pub use script::parse_script;

use crate::core::{Action, Digit, Operator};

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
    };

    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Map a key name to an action.
///
/// Presses with Ctrl, Meta or Alt held are ignored so browser and desktop
/// shortcuts keep working.
pub fn map_key(key: &str, modifiers: Modifiers) -> Option<Action> {
    if modifiers.any() {
        return None;
    }

    if let Some(digit) = single_char(key).and_then(Digit::from_char) {
        return Some(Action::Digit(digit));
    }

    match key {
        "." | "Decimal" => Some(Action::DecimalPoint),
        "Enter" | "=" => Some(Action::Evaluate),
        "Escape" | "Esc" => Some(Action::ClearEntry),
        "Delete" => Some(Action::ClearAll),
        _ => Operator::parse(key).map(Action::Operator),
    }
}

/// Map a calculator button to an action.
///
/// `action` and `value` are the button's action and value attributes;
/// `is_operator` marks buttons styled as operators, whose value is an
/// operator symbol rather than a digit.
pub fn map_button(
    action: Option<&str>,
    value: Option<&str>,
    is_operator: bool,
) -> Option<Action> {
    match action {
        Some("decimal") => return Some(Action::DecimalPoint),
        Some("equals") => return Some(Action::Evaluate),
        Some("clear") => return Some(Action::ClearEntry),
        Some("clearAll") => return Some(Action::ClearAll),
        _ => {}
    }

    let value = value?;
    if is_operator {
        return Operator::parse(value).map(Action::Operator);
    }
    single_char(value)
        .and_then(Digit::from_char)
        .map(Action::Digit)
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
