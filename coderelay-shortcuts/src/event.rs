//! Normalized key input and winit conversion glue.

use crate::chord::Modifiers;
use winit::event::KeyEvent;
use winit::keyboard::Key;

/// A key press delivered to the shortcut registry by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Convert a winit key event into a [`KeyPress`].
    ///
    /// Character keys keep their produced text; named keys use their name
    /// (`Enter`, `Escape`, `F5`). Keys the registry cannot address (dead
    /// keys, unidentified keys) yield `None`.
    pub fn from_winit(event: &KeyEvent, modifiers: &winit::event::Modifiers) -> Option<Self> {
        let key = match &event.logical_key {
            Key::Character(text) => text.to_string(),
            Key::Named(named) => format!("{named:?}"),
            _ => return None,
        };

        let state = modifiers.state();
        Some(Self {
            key,
            modifiers: Modifiers {
                ctrl: state.control_key(),
                alt: state.alt_key(),
                shift: state.shift_key(),
                meta: state.super_key(),
            },
        })
    }
}

// Conversion from winit events is not unit-tested here: winit KeyEvent has
// private fields and cannot be constructed in tests. The matching logic is
// exercised through KeyPress values built directly.
