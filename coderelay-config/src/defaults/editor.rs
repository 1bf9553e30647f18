//! Default values for the editor panel.

pub fn editor_font_size() -> u32 {
    14
}

pub fn editor_font_family() -> String {
    "Consolas, Monaco, \"Courier New\", monospace".to_string()
}

pub fn editor_line_height() -> f32 {
    1.5
}

pub fn tab_size() -> u32 {
    2
}

pub fn insert_spaces() -> bool {
    true
}

pub fn word_wrap() -> bool {
    false
}

pub fn minimap() -> bool {
    true
}

pub fn line_numbers() -> bool {
    true
}

pub fn auto_save() -> bool {
    true
}

pub fn format_on_save() -> bool {
    true
}

pub fn format_on_paste() -> bool {
    true
}

pub fn suggest_on_trigger_characters() -> bool {
    true
}

pub fn accept_suggestion_on_enter() -> bool {
    true
}

pub fn quick_suggestions() -> bool {
    true
}
