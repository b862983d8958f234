//! Keypad buttons.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::calculator::{BinaryOp, Function};

/// A keypad input. Every button the front ends can produce is one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// A digit. Only `0..=9` types anything; other values are ignored
    /// by the reducer and never produced by `FromStr` or the layouts.
    Digit(u8),
    /// Decimal point.
    Point,
    /// The constant π.
    Pi,
    /// Euler's number.
    E,
    Operator(BinaryOp),
    Function(Function),
    /// `C`: clear everything.
    Clear,
    /// `CE`: delete the last character, or the whole `Error` text.
    ClearEntry,
    /// `=`: evaluate.
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button label: {0:?}")]
pub struct UnknownButton(pub String);

impl Button {
    /// The text printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Pi => "π".to_string(),
            Self::E => "e".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(func) => func.label().to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Map a keyboard key to a button.
    ///
    /// `key` is the key name (`"enter"`, `"backspace"`, `"7"`, ...) and
    /// `key_char` the character it would type, if any.
    pub fn from_key(key: &str, key_char: Option<&str>) -> Option<Self> {
        match key {
            "enter" => return Some(Self::Equals),
            "backspace" => return Some(Self::ClearEntry),
            "escape" | "delete" => return Some(Self::Clear),
            _ => {}
        }

        key_char?.parse().ok()
    }

    /// Buttons that append text to the display.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Point | Self::Pi | Self::E | Self::Operator(_)
        )
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Button {
    type Err = UnknownButton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let button = match s {
            "." => Self::Point,
            "π" | "pi" => Self::Pi,
            "e" => Self::E,
            "C" => Self::Clear,
            "CE" => Self::ClearEntry,
            "=" => Self::Equals,
            _ => {
                if let [c] = s.as_bytes()
                    && c.is_ascii_digit()
                {
                    return Ok(Self::Digit(c - b'0'));
                }
                if let Ok(op) = s.parse::<BinaryOp>() {
                    return Ok(Self::Operator(op));
                }
                if let Ok(func) = s.parse::<Function>() {
                    return Ok(Self::Function(func));
                }
                return Err(UnknownButton(s.to_string()));
            }
        };
        Ok(button)
    }
}
