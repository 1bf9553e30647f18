//! Default values for top-level preferences.

pub fn theme() -> String {
    "dark".to_string()
}

pub fn language() -> String {
    "en".to_string()
}

pub fn auto_update() -> bool {
    true
}

pub fn telemetry() -> bool {
    false
}
