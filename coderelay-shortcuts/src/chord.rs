//! Key chord descriptors and parsing.
//!
//! Parses human-readable chord strings like "Ctrl+Shift+S" into
//! [`KeyChord`] values and canonicalizes modifier+key combinations for
//! registry keying.

use crate::event::KeyPress;
use std::fmt;

/// Error type for chord parsing failures.
#[derive(Debug, Clone)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// Set of active modifiers for a key chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A modifier+key combination identifying a keyboard shortcut.
///
/// The key is a character (`"s"`, `"/"`) or a named key (`"F5"`,
/// `"Enter"`); matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// Canonical registry key: modifier names joined by `+` in fixed order
    /// (ctrl, alt, shift, meta), then the lowercased key.
    pub fn canonical_id(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.ctrl {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        if self.modifiers.meta {
            parts.push("meta".to_string());
        }
        parts.push(self.key.to_lowercase());
        parts.join("+")
    }

    /// Whether a key press matches this chord: the key compares
    /// case-insensitively (same folding as [`KeyChord::canonical_id`]),
    /// all four modifier flags must match exactly.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key.to_lowercase() == press.key.to_lowercase() && self.modifiers == press.modifiers
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.meta {
            parts.push("Meta".to_string());
        }
        parts.push(self.key.clone());
        write!(f, "{}", parts.join("+"))
    }
}

/// Parse a chord string into a [`KeyChord`].
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control`
/// - `Alt`, `Option`
/// - `Shift`
/// - `Meta`, `Cmd`, `Command`, `Super`, `Win`
///
/// The final token is the key itself: a character (`S`, `/`, `1`) or a
/// named key (`F5`, `Enter`, `Escape`).
pub fn parse_chord(s: &str) -> Result<KeyChord, ParseError> {
    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut modifiers = Modifiers::default();
    let mut key = None;

    for (index, part) in parts.iter().enumerate() {
        let is_last = index == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "meta" | "cmd" | "command" | "super" | "win" => {
                modifiers.meta = true;
                true
            }
            _ => false,
        };

        if is_modifier {
            if is_last {
                return Err(ParseError(format!("'{s}' ends with a modifier, not a key")));
            }
            continue;
        }

        if part.is_empty() {
            return Err(ParseError(format!("Empty token in '{s}'")));
        }
        if !is_last {
            return Err(ParseError(format!(
                "Key '{part}' must be the final token in '{s}'"
            )));
        }
        key = Some((*part).to_string());
    }

    match key {
        Some(key) => Ok(KeyChord { key, modifiers }),
        None => Err(ParseError(format!("No key in '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifier_combinations() {
        let chord = parse_chord("Ctrl+Shift+S").unwrap();
        assert_eq!(chord.key, "S");
        assert!(chord.modifiers.ctrl);
        assert!(chord.modifiers.shift);
        assert!(!chord.modifiers.alt);
        assert!(!chord.modifiers.meta);
    }

    #[test]
    fn parses_modifier_aliases() {
        assert!(parse_chord("Control+A").unwrap().modifiers.ctrl);
        assert!(parse_chord("Option+A").unwrap().modifiers.alt);
        assert!(parse_chord("Cmd+A").unwrap().modifiers.meta);
        assert!(parse_chord("Win+A").unwrap().modifiers.meta);
    }

    #[test]
    fn parses_bare_and_named_keys() {
        assert_eq!(parse_chord("F5").unwrap().key, "F5");
        assert_eq!(parse_chord("Ctrl+/").unwrap().key, "/");
        let escape = parse_chord("Escape").unwrap();
        assert_eq!(escape.key, "Escape");
        assert_eq!(escape.modifiers, Modifiers::default());
    }

    #[test]
    fn rejects_malformed_chords() {
        assert!(parse_chord("").is_err());
        assert!(parse_chord("Ctrl+Shift").is_err());
        assert!(parse_chord("Ctrl++S").is_err());
        assert!(parse_chord("S+Ctrl").is_err());
    }

    #[test]
    fn canonical_id_uses_fixed_modifier_order() {
        let chord = parse_chord("Shift+Meta+Alt+Ctrl+S").unwrap();
        assert_eq!(chord.canonical_id(), "ctrl+alt+shift+meta+s");
    }

    #[test]
    fn canonical_id_is_case_insensitive_on_key() {
        assert_eq!(
            parse_chord("Ctrl+S").unwrap().canonical_id(),
            parse_chord("Ctrl+s").unwrap().canonical_id()
        );
    }

    #[test]
    fn display_is_human_readable() {
        let chord = parse_chord("ctrl+shift+b").unwrap();
        assert_eq!(chord.to_string(), "Ctrl+Shift+b");
    }

    #[test]
    fn matching_is_case_insensitive_and_exact_on_modifiers() {
        let chord = parse_chord("Ctrl+S").unwrap();
        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };

        assert!(chord.matches(&KeyPress::new("s", ctrl)));
        assert!(chord.matches(&KeyPress::new("S", ctrl)));
        assert!(!chord.matches(&KeyPress::new("s", Modifiers::default())));
        assert!(!chord.matches(&KeyPress::new(
            "s",
            Modifiers {
                ctrl: true,
                shift: true,
                ..Default::default()
            }
        )));
        assert!(!chord.matches(&KeyPress::new("n", ctrl)));
    }

    #[test]
    fn matching_folds_non_ascii_keys_like_canonical_id() {
        let chord = parse_chord("Ctrl+É").unwrap();
        let lower = parse_chord("Ctrl+é").unwrap();
        assert_eq!(chord.canonical_id(), lower.canonical_id());

        let ctrl = Modifiers {
            ctrl: true,
            ..Default::default()
        };
        assert!(chord.matches(&KeyPress::new("é", ctrl)));
        assert!(chord.matches(&KeyPress::new("É", ctrl)));
    }
}
