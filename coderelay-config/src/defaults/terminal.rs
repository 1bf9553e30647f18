//! Default values for the terminal panel.

use crate::types::CursorStyle;

pub fn terminal_font_size() -> u32 {
    14
}

pub fn terminal_font_family() -> String {
    "Consolas, Monaco, \"Courier New\", monospace".to_string()
}

pub fn terminal_line_height() -> f32 {
    1.2
}

pub fn cursor_blink() -> bool {
    true
}

pub fn cursor_style() -> CursorStyle {
    CursorStyle::Block
}

pub fn scrollback() -> u32 {
    1000 // Lines of scrollback history
}

pub fn copy_on_selection() -> bool {
    true
}

pub fn right_click_selects_word() -> bool {
    true
}
