//! Keyboard vocabulary shared by the gallery and shortcut handlers.
//!
//! Key names follow the DOM `KeyboardEvent.key` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A roving-focus movement within a one-dimensional group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowRight or ArrowDown.
    Next,
    /// ArrowLeft or ArrowUp.
    Previous,
    /// Home.
    First,
    /// End.
    Last,
}

impl NavKey {
    /// Map a DOM key name to a movement. Other keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }

    /// Resolve the movement against a group of `len` items focused at `current`.
    ///
    /// Movement does not wrap: stepping past either end yields `None`.
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Next => current.checked_add(1).filter(|&i| i < len),
            Self::Previous => current.checked_sub(1),
            Self::First => Some(0),
            Self::Last => Some(len - 1),
        }
    }
}

/// Modifier key that must be held for a global shortcut to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Alt,
    Ctrl,
    Meta,
    Shift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Meta => "Meta",
            Self::Shift => "Shift",
        };
        f.write_str(name)
    }
}
