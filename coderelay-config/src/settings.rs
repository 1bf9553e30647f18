//! Settings records for the editor, terminal, and chat panels.
//!
//! The aggregate [`Settings`] record is what the store persists as a JSON
//! blob (camelCase field names on the wire). Every field carries a
//! `#[serde(default = ...)]` pointing at [`crate::defaults`], so a sparse
//! blob deserializes as "persisted values win, missing fields fall back to
//! the hardcoded default" without any explicit merge step.
//!
//! Partial updates go through the `*Patch` types: all-`Option` records whose
//! `apply_to` overwrites exactly the provided fields. Sub-record patches
//! merge one level deep; [`SettingsPatch`] replaces whole sub-records, so
//! merging never recurses further.

use crate::types::CursorStyle;
use serde::{Deserialize, Serialize};

/// Editor panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    #[serde(default = "crate::defaults::editor_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::defaults::editor_font_family")]
    pub font_family: String,
    #[serde(default = "crate::defaults::editor_line_height")]
    pub line_height: f32,
    #[serde(default = "crate::defaults::tab_size")]
    pub tab_size: u32,
    #[serde(default = "crate::defaults::insert_spaces")]
    pub insert_spaces: bool,
    #[serde(default = "crate::defaults::word_wrap")]
    pub word_wrap: bool,
    #[serde(default = "crate::defaults::minimap")]
    pub minimap: bool,
    #[serde(default = "crate::defaults::line_numbers")]
    pub line_numbers: bool,
    #[serde(default = "crate::defaults::auto_save")]
    pub auto_save: bool,
    #[serde(default = "crate::defaults::format_on_save")]
    pub format_on_save: bool,
    #[serde(default = "crate::defaults::format_on_paste")]
    pub format_on_paste: bool,
    #[serde(default = "crate::defaults::suggest_on_trigger_characters")]
    pub suggest_on_trigger_characters: bool,
    #[serde(default = "crate::defaults::accept_suggestion_on_enter")]
    pub accept_suggestion_on_enter: bool,
    #[serde(default = "crate::defaults::quick_suggestions")]
    pub quick_suggestions: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: crate::defaults::editor_font_size(),
            font_family: crate::defaults::editor_font_family(),
            line_height: crate::defaults::editor_line_height(),
            tab_size: crate::defaults::tab_size(),
            insert_spaces: crate::defaults::insert_spaces(),
            word_wrap: crate::defaults::word_wrap(),
            minimap: crate::defaults::minimap(),
            line_numbers: crate::defaults::line_numbers(),
            auto_save: crate::defaults::auto_save(),
            format_on_save: crate::defaults::format_on_save(),
            format_on_paste: crate::defaults::format_on_paste(),
            suggest_on_trigger_characters: crate::defaults::suggest_on_trigger_characters(),
            accept_suggestion_on_enter: crate::defaults::accept_suggestion_on_enter(),
            quick_suggestions: crate::defaults::quick_suggestions(),
        }
    }
}

/// Terminal panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalSettings {
    #[serde(default = "crate::defaults::terminal_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::defaults::terminal_font_family")]
    pub font_family: String,
    #[serde(default = "crate::defaults::terminal_line_height")]
    pub line_height: f32,
    #[serde(default = "crate::defaults::cursor_blink")]
    pub cursor_blink: bool,
    #[serde(default = "crate::defaults::cursor_style")]
    pub cursor_style: CursorStyle,
    #[serde(default = "crate::defaults::scrollback")]
    pub scrollback: u32,
    #[serde(default = "crate::defaults::copy_on_selection")]
    pub copy_on_selection: bool,
    #[serde(default = "crate::defaults::right_click_selects_word")]
    pub right_click_selects_word: bool,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            font_size: crate::defaults::terminal_font_size(),
            font_family: crate::defaults::terminal_font_family(),
            line_height: crate::defaults::terminal_line_height(),
            cursor_blink: crate::defaults::cursor_blink(),
            cursor_style: crate::defaults::cursor_style(),
            scrollback: crate::defaults::scrollback(),
            copy_on_selection: crate::defaults::copy_on_selection(),
            right_click_selects_word: crate::defaults::right_click_selects_word(),
        }
    }
}

/// Chat panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSettings {
    #[serde(default = "crate::defaults::chat_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::defaults::chat_font_family")]
    pub font_family: String,
    #[serde(default = "crate::defaults::chat_line_height")]
    pub line_height: f32,
    #[serde(default = "crate::defaults::message_spacing")]
    pub message_spacing: u32,
    #[serde(default = "crate::defaults::show_timestamps")]
    pub show_timestamps: bool,
    #[serde(default = "crate::defaults::show_user_avatars")]
    pub show_user_avatars: bool,
    #[serde(default = "crate::defaults::show_code_highlighting")]
    pub show_code_highlighting: bool,
    #[serde(default = "crate::defaults::max_message_length")]
    pub max_message_length: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            font_size: crate::defaults::chat_font_size(),
            font_family: crate::defaults::chat_font_family(),
            line_height: crate::defaults::chat_line_height(),
            message_spacing: crate::defaults::message_spacing(),
            show_timestamps: crate::defaults::show_timestamps(),
            show_user_avatars: crate::defaults::show_user_avatars(),
            show_code_highlighting: crate::defaults::show_code_highlighting(),
            max_message_length: crate::defaults::max_message_length(),
        }
    }
}

/// The full settings aggregate: per-panel sub-records plus top-level
/// preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub terminal: TerminalSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default = "crate::defaults::theme")]
    pub theme: String,
    #[serde(default = "crate::defaults::language")]
    pub language: String,
    #[serde(default = "crate::defaults::auto_update")]
    pub auto_update: bool,
    #[serde(default = "crate::defaults::telemetry")]
    pub telemetry: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: EditorSettings::default(),
            terminal: TerminalSettings::default(),
            chat: ChatSettings::default(),
            theme: crate::defaults::theme(),
            language: crate::defaults::language(),
            auto_update: crate::defaults::auto_update(),
            telemetry: crate::defaults::telemetry(),
        }
    }
}

/// Partial update for [`EditorSettings`].
#[derive(Debug, Clone, Default)]
pub struct EditorSettingsPatch {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub line_height: Option<f32>,
    pub tab_size: Option<u32>,
    pub insert_spaces: Option<bool>,
    pub word_wrap: Option<bool>,
    pub minimap: Option<bool>,
    pub line_numbers: Option<bool>,
    pub auto_save: Option<bool>,
    pub format_on_save: Option<bool>,
    pub format_on_paste: Option<bool>,
    pub suggest_on_trigger_characters: Option<bool>,
    pub accept_suggestion_on_enter: Option<bool>,
    pub quick_suggestions: Option<bool>,
}

impl EditorSettingsPatch {
    /// Overwrite exactly the provided fields on `settings`.
    pub fn apply_to(&self, settings: &mut EditorSettings) {
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(ref font_family) = self.font_family {
            settings.font_family = font_family.clone();
        }
        if let Some(line_height) = self.line_height {
            settings.line_height = line_height;
        }
        if let Some(tab_size) = self.tab_size {
            settings.tab_size = tab_size;
        }
        if let Some(insert_spaces) = self.insert_spaces {
            settings.insert_spaces = insert_spaces;
        }
        if let Some(word_wrap) = self.word_wrap {
            settings.word_wrap = word_wrap;
        }
        if let Some(minimap) = self.minimap {
            settings.minimap = minimap;
        }
        if let Some(line_numbers) = self.line_numbers {
            settings.line_numbers = line_numbers;
        }
        if let Some(auto_save) = self.auto_save {
            settings.auto_save = auto_save;
        }
        if let Some(format_on_save) = self.format_on_save {
            settings.format_on_save = format_on_save;
        }
        if let Some(format_on_paste) = self.format_on_paste {
            settings.format_on_paste = format_on_paste;
        }
        if let Some(suggest) = self.suggest_on_trigger_characters {
            settings.suggest_on_trigger_characters = suggest;
        }
        if let Some(accept) = self.accept_suggestion_on_enter {
            settings.accept_suggestion_on_enter = accept;
        }
        if let Some(quick_suggestions) = self.quick_suggestions {
            settings.quick_suggestions = quick_suggestions;
        }
    }
}

/// Partial update for [`TerminalSettings`].
#[derive(Debug, Clone, Default)]
pub struct TerminalSettingsPatch {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub line_height: Option<f32>,
    pub cursor_blink: Option<bool>,
    pub cursor_style: Option<CursorStyle>,
    pub scrollback: Option<u32>,
    pub copy_on_selection: Option<bool>,
    pub right_click_selects_word: Option<bool>,
}

impl TerminalSettingsPatch {
    /// Overwrite exactly the provided fields on `settings`.
    pub fn apply_to(&self, settings: &mut TerminalSettings) {
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(ref font_family) = self.font_family {
            settings.font_family = font_family.clone();
        }
        if let Some(line_height) = self.line_height {
            settings.line_height = line_height;
        }
        if let Some(cursor_blink) = self.cursor_blink {
            settings.cursor_blink = cursor_blink;
        }
        if let Some(cursor_style) = self.cursor_style {
            settings.cursor_style = cursor_style;
        }
        if let Some(scrollback) = self.scrollback {
            settings.scrollback = scrollback;
        }
        if let Some(copy_on_selection) = self.copy_on_selection {
            settings.copy_on_selection = copy_on_selection;
        }
        if let Some(right_click) = self.right_click_selects_word {
            settings.right_click_selects_word = right_click;
        }
    }
}

/// Partial update for [`ChatSettings`].
#[derive(Debug, Clone, Default)]
pub struct ChatSettingsPatch {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub line_height: Option<f32>,
    pub message_spacing: Option<u32>,
    pub show_timestamps: Option<bool>,
    pub show_user_avatars: Option<bool>,
    pub show_code_highlighting: Option<bool>,
    pub max_message_length: Option<u32>,
}

impl ChatSettingsPatch {
    /// Overwrite exactly the provided fields on `settings`.
    pub fn apply_to(&self, settings: &mut ChatSettings) {
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(ref font_family) = self.font_family {
            settings.font_family = font_family.clone();
        }
        if let Some(line_height) = self.line_height {
            settings.line_height = line_height;
        }
        if let Some(message_spacing) = self.message_spacing {
            settings.message_spacing = message_spacing;
        }
        if let Some(show_timestamps) = self.show_timestamps {
            settings.show_timestamps = show_timestamps;
        }
        if let Some(show_user_avatars) = self.show_user_avatars {
            settings.show_user_avatars = show_user_avatars;
        }
        if let Some(show_code_highlighting) = self.show_code_highlighting {
            settings.show_code_highlighting = show_code_highlighting;
        }
        if let Some(max_message_length) = self.max_message_length {
            settings.max_message_length = max_message_length;
        }
    }
}

/// Top-level partial update. Provided sub-records replace the whole
/// sub-record; the merge is shallow by design.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub editor: Option<EditorSettings>,
    pub terminal: Option<TerminalSettings>,
    pub chat: Option<ChatSettings>,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub auto_update: Option<bool>,
    pub telemetry: Option<bool>,
}

impl SettingsPatch {
    /// Overwrite exactly the provided top-level keys on `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(ref editor) = self.editor {
            settings.editor = editor.clone();
        }
        if let Some(ref terminal) = self.terminal {
            settings.terminal = terminal.clone();
        }
        if let Some(ref chat) = self.chat {
            settings.chat = chat.clone();
        }
        if let Some(ref theme) = self.theme {
            settings.theme = theme.clone();
        }
        if let Some(ref language) = self.language {
            settings.language = language.clone();
        }
        if let Some(auto_update) = self.auto_update {
            settings.auto_update = auto_update;
        }
        if let Some(telemetry) = self.telemetry {
            settings.telemetry = telemetry;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_roundtrip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Settings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(parsed.theme, "light");
        assert_eq!(parsed.editor, EditorSettings::default());
        assert_eq!(parsed.language, "en");
    }

    #[test]
    fn sparse_sub_record_fills_missing_fields() {
        let parsed: Settings =
            serde_json::from_str(r#"{"editor":{"fontSize":18,"wordWrap":true}}"#).unwrap();
        assert_eq!(parsed.editor.font_size, 18);
        assert!(parsed.editor.word_wrap);
        assert_eq!(parsed.editor.tab_size, 2);
        assert!(parsed.editor.minimap);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"cursorStyle\":\"block\""));
        assert!(json.contains("\"showTimestamps\""));
        assert!(json.contains("\"autoUpdate\""));
    }

    #[test]
    fn editor_patch_touches_only_provided_fields() {
        let mut settings = EditorSettings::default();
        let patch = EditorSettingsPatch {
            font_size: Some(18),
            word_wrap: Some(true),
            ..Default::default()
        };
        patch.apply_to(&mut settings);

        let expected = EditorSettings {
            font_size: 18,
            word_wrap: true,
            ..Default::default()
        };
        assert_eq!(settings, expected);
    }

    #[test]
    fn top_level_patch_replaces_whole_sub_record() {
        let mut settings = Settings::default();
        settings.editor.font_size = 20;

        let patch = SettingsPatch {
            editor: Some(EditorSettings::default()),
            ..Default::default()
        };
        patch.apply_to(&mut settings);
        assert_eq!(settings.editor.font_size, 14);
    }
}
