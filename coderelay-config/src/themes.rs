//! Color theme definitions for the editor, terminal, and chat surfaces.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in RGB format, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, with or without the leading `#`.
    /// Anything else (shorthand, alpha, named colors) yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, used for generated palette entries.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Interpolate linearly toward white. Channels saturate at 255, so
    /// lightening pure white repeats it.
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |c: u8| (f32::from(c) + (255.0 - f32::from(c)) * amount).round() as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Interpolate linearly toward black. Channels clamp at 0, so darkening
    /// pure black repeats it.
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |c: u8| (f32::from(c) * (1.0 - amount)).round() as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid hex color '{raw}'")))
    }
}

/// Gutter colors nested inside the editor palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GutterColors {
    pub background: Color,
    pub foreground: Color,
}

/// Editor surface palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorColors {
    pub background: Color,
    pub foreground: Color,
    pub selection: Color,
    pub line_highlight: Color,
    pub cursor: Color,
    pub find_match: Color,
    pub find_match_highlight: Color,
    pub gutter: GutterColors,
}

/// Terminal surface palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalColors {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub selection: Color,
}

/// Chat surface palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatColors {
    pub background: Color,
    pub foreground: Color,
    pub user_message: Color,
    pub assistant_message: Color,
    pub timestamp: Color,
}

/// All color values of a theme: shared scalars plus per-surface palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub editor: EditorColors,
    pub terminal: TerminalColors,
    pub chat: ChatColors,
}

/// A named color theme. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::new(0x1e, 0x1e, 0x1e),
                foreground: Color::new(0xd4, 0xd4, 0xd4),
                primary: Color::new(0x00, 0x7a, 0xcc),
                secondary: Color::new(0x6c, 0x75, 0x7d),
                accent: Color::new(0x9c, 0xdc, 0xfe),
                error: Color::new(0xf1, 0x4c, 0x4c),
                warning: Color::new(0xcc, 0xa7, 0x00),
                success: Color::new(0x6a, 0x99, 0x55),
                editor: EditorColors {
                    background: Color::new(0x1e, 0x1e, 0x1e),
                    foreground: Color::new(0xd4, 0xd4, 0xd4),
                    selection: Color::new(0x26, 0x4f, 0x78),
                    line_highlight: Color::new(0x2a, 0x2d, 0x2e),
                    cursor: Color::new(0xd4, 0xd4, 0xd4),
                    find_match: Color::new(0x51, 0x5c, 0x6a),
                    find_match_highlight: Color::new(0x6a, 0x99, 0x55),
                    gutter: GutterColors {
                        background: Color::new(0x1e, 0x1e, 0x1e),
                        foreground: Color::new(0x85, 0x85, 0x85),
                    },
                },
                terminal: TerminalColors {
                    background: Color::new(0x1e, 0x1e, 0x1e),
                    foreground: Color::new(0xd4, 0xd4, 0xd4),
                    cursor: Color::new(0xd4, 0xd4, 0xd4),
                    selection: Color::new(0x26, 0x4f, 0x78),
                },
                chat: ChatColors {
                    background: Color::new(0x1e, 0x1e, 0x1e),
                    foreground: Color::new(0xd4, 0xd4, 0xd4),
                    user_message: Color::new(0x2d, 0x2d, 0x2d),
                    assistant_message: Color::new(0x25, 0x25, 0x26),
                    timestamp: Color::new(0x6c, 0x75, 0x7d),
                },
            },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::new(0xff, 0xff, 0xff),
                foreground: Color::new(0x33, 0x33, 0x33),
                primary: Color::new(0x00, 0x7a, 0xcc),
                secondary: Color::new(0x6c, 0x75, 0x7d),
                accent: Color::new(0x00, 0x78, 0xd4),
                error: Color::new(0xdc, 0x35, 0x45),
                warning: Color::new(0xff, 0xc1, 0x07),
                success: Color::new(0x28, 0xa7, 0x45),
                editor: EditorColors {
                    background: Color::new(0xff, 0xff, 0xff),
                    foreground: Color::new(0x33, 0x33, 0x33),
                    selection: Color::new(0xad, 0xd6, 0xff),
                    line_highlight: Color::new(0xf0, 0xf0, 0xf0),
                    cursor: Color::new(0x33, 0x33, 0x33),
                    find_match: Color::new(0xe8, 0xe8, 0xe8),
                    find_match_highlight: Color::new(0xa8, 0xd0, 0x8d),
                    gutter: GutterColors {
                        background: Color::new(0xf3, 0xf3, 0xf3),
                        foreground: Color::new(0x99, 0x99, 0x99),
                    },
                },
                terminal: TerminalColors {
                    background: Color::new(0xff, 0xff, 0xff),
                    foreground: Color::new(0x33, 0x33, 0x33),
                    cursor: Color::new(0x33, 0x33, 0x33),
                    selection: Color::new(0xad, 0xd6, 0xff),
                },
                chat: ChatColors {
                    background: Color::new(0xff, 0xff, 0xff),
                    foreground: Color::new(0x33, 0x33, 0x33),
                    user_message: Color::new(0xf8, 0xf9, 0xfa),
                    assistant_message: Color::new(0xff, 0xff, 0xff),
                    timestamp: Color::new(0x6c, 0x75, 0x7d),
                },
            },
        }
    }

    /// High Contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            colors: ThemeColors {
                background: Color::new(0x00, 0x00, 0x00),
                foreground: Color::new(0xff, 0xff, 0xff),
                primary: Color::new(0xff, 0xff, 0x00),
                secondary: Color::new(0x00, 0xff, 0x00),
                accent: Color::new(0x00, 0xff, 0xff),
                error: Color::new(0xff, 0x00, 0x00),
                warning: Color::new(0xff, 0xff, 0x00),
                success: Color::new(0x00, 0xff, 0x00),
                editor: EditorColors {
                    background: Color::new(0x00, 0x00, 0x00),
                    foreground: Color::new(0xff, 0xff, 0xff),
                    selection: Color::new(0xff, 0xff, 0x00),
                    line_highlight: Color::new(0x1a, 0x1a, 0x1a),
                    cursor: Color::new(0xff, 0xff, 0xff),
                    find_match: Color::new(0xff, 0xff, 0x00),
                    find_match_highlight: Color::new(0x00, 0xff, 0x00),
                    gutter: GutterColors {
                        background: Color::new(0x00, 0x00, 0x00),
                        foreground: Color::new(0xff, 0xff, 0xff),
                    },
                },
                terminal: TerminalColors {
                    background: Color::new(0x00, 0x00, 0x00),
                    foreground: Color::new(0xff, 0xff, 0xff),
                    cursor: Color::new(0xff, 0xff, 0xff),
                    selection: Color::new(0xff, 0xff, 0x00),
                },
                chat: ChatColors {
                    background: Color::new(0x00, 0x00, 0x00),
                    foreground: Color::new(0xff, 0xff, 0xff),
                    user_message: Color::new(0x1a, 0x1a, 0x1a),
                    assistant_message: Color::new(0x00, 0x00, 0x00),
                    timestamp: Color::new(0x00, 0xff, 0x00),
                },
            },
        }
    }
}

/// Generate a nine-entry palette from a base color: four progressively
/// lighter `rgb()` variants (interpolation factors 0.2 through 0.8), the
/// base string verbatim, then four progressively darker variants.
///
/// Input that is not a strict six-digit hex color yields an empty vec.
pub fn generate_color_palette(base: &str) -> Vec<String> {
    let Some(color) = Color::from_hex(base) else {
        return Vec::new();
    };

    let mut palette = Vec::with_capacity(9);
    for step in 1..=4 {
        palette.push(color.lighten(step as f32 * 0.2).to_rgb_string());
    }
    palette.push(base.to_string());
    for step in 1..=4 {
        palette.push(color.darken(step as f32 * 0.2).to_rgb_string());
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_is_strict() {
        assert_eq!(Color::from_hex("#1e1e1e"), Some(Color::new(0x1e, 0x1e, 0x1e)));
        assert_eq!(Color::from_hex("FFcc00"), Some(Color::new(0xff, 0xcc, 0x00)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#11223344"), None);
        assert_eq!(Color::from_hex("not-a-color"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn hex_roundtrip() {
        let color = Color::new(0x00, 0x7a, 0xcc);
        assert_eq!(color.to_hex(), "#007acc");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::new(0x1e, 0x1e, 0x1e)).unwrap();
        assert_eq!(json, "\"#1e1e1e\"");
        let parsed: Color = serde_json::from_str("\"#007acc\"").unwrap();
        assert_eq!(parsed, Color::new(0x00, 0x7a, 0xcc));
        assert!(serde_json::from_str::<Color>("\"cyan\"").is_err());
    }

    #[test]
    fn theme_wire_names_are_camel_case() {
        let json = serde_json::to_string(&Theme::dark()).unwrap();
        assert!(json.contains("\"lineHighlight\""));
        assert!(json.contains("\"findMatchHighlight\""));
        assert!(json.contains("\"userMessage\""));
        assert!(json.contains("\"gutter\""));
    }

    #[test]
    fn palette_shape_for_black() {
        let palette = generate_color_palette("#000000");
        assert_eq!(palette.len(), 9);
        assert_eq!(
            palette[..4],
            [
                "rgb(51, 51, 51)",
                "rgb(102, 102, 102)",
                "rgb(153, 153, 153)",
                "rgb(204, 204, 204)",
            ]
        );
        assert_eq!(palette[4], "#000000");
        // Darkening pure black clamps to a repeated value.
        for entry in &palette[5..] {
            assert_eq!(entry, "rgb(0, 0, 0)");
        }
    }

    #[test]
    fn palette_darkens_and_lightens_midtones() {
        let palette = generate_color_palette("#646464"); // rgb(100, 100, 100)
        assert_eq!(palette[4], "#646464");
        assert_eq!(palette[0], "rgb(131, 131, 131)");
        assert_eq!(palette[5], "rgb(80, 80, 80)");
        assert_eq!(palette[8], "rgb(20, 20, 20)");
    }

    #[test]
    fn palette_rejects_invalid_input() {
        assert!(generate_color_palette("not-a-color").is_empty());
        assert!(generate_color_palette("#fff").is_empty());
        assert!(generate_color_palette("").is_empty());
    }

    #[test]
    fn builtin_themes_have_expected_anchors() {
        assert_eq!(Theme::dark().colors.background.to_hex(), "#1e1e1e");
        assert_eq!(Theme::light().colors.background.to_hex(), "#ffffff");
        assert_eq!(
            Theme::high_contrast().colors.primary.to_hex(),
            "#ffff00"
        );
        assert_eq!(
            Theme::dark().colors.editor.gutter.foreground.to_hex(),
            "#858585"
        );
    }
}
