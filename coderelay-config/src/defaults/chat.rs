//! Default values for the chat panel.

pub fn chat_font_size() -> u32 {
    14
}

pub fn chat_font_family() -> String {
    "system-ui, -apple-system, sans-serif".to_string()
}

pub fn chat_line_height() -> f32 {
    1.5
}

pub fn message_spacing() -> u32 {
    16 // Vertical gap between messages, in pixels
}

pub fn show_timestamps() -> bool {
    true
}

pub fn show_user_avatars() -> bool {
    true
}

pub fn show_code_highlighting() -> bool {
    true
}

pub fn max_message_length() -> u32 {
    1000
}
