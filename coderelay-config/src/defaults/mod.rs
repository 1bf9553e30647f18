//! Default value functions for settings records.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on the settings
//! structs. Everything is re-exported from this module so that call-sites
//! use `crate::defaults::*` uniformly. The `Default` impls of the settings
//! records are built from the same functions, so a missing field in a
//! persisted or imported blob always falls back to the hardcoded default.

mod chat;
mod editor;
mod general;
mod terminal;

// ── Editor panel ───────────────────────────────────────────────────────────
pub use editor::{
    accept_suggestion_on_enter, auto_save, editor_font_family, editor_font_size,
    editor_line_height, format_on_paste, format_on_save, insert_spaces, line_numbers, minimap,
    quick_suggestions, suggest_on_trigger_characters, tab_size, word_wrap,
};

// ── Terminal panel ─────────────────────────────────────────────────────────
pub use terminal::{
    copy_on_selection, cursor_blink, cursor_style, right_click_selects_word, scrollback,
    terminal_font_family, terminal_font_size, terminal_line_height,
};

// ── Chat panel ─────────────────────────────────────────────────────────────
pub use chat::{
    chat_font_family, chat_font_size, chat_line_height, max_message_length, message_spacing,
    show_code_highlighting, show_timestamps, show_user_avatars,
};

// ── Top-level preferences ──────────────────────────────────────────────────
pub use general::{auto_update, language, telemetry, theme};
