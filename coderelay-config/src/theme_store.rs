//! The theme store: a fixed registry of named themes, presentation-property
//! application, and change subscriptions.
//!
//! Applying a theme flattens its color record into dash-joined custom
//! property names (`--editor-gutter-background`) and writes each leaf value
//! through the injected [`StyleSink`]. Construction performs no side
//! effects; the composition root calls [`ThemeStore::activate`] once
//! subscribers have registered.

use crate::storage::StorageAdapter;
use crate::subscribers::{Subscribers, Subscription};
use crate::themes::{self, Theme};
use parking_lot::Mutex;
use std::sync::Arc;

/// Storage key for the persisted theme name.
pub const PREFERRED_THEME_KEY: &str = "preferred-theme";

/// Presentation-layer boundary: receives one custom property per scalar
/// color value when a theme is applied.
pub trait StyleSink: Send + Sync {
    fn set_property(&self, name: &str, value: &str);
}

/// A sink that discards every property, for headless use.
#[derive(Debug, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn set_property(&self, _name: &str, _value: &str) {}
}

/// Process-lifetime store for the fixed theme registry.
pub struct ThemeStore {
    storage: Arc<dyn StorageAdapter>,
    sink: Arc<dyn StyleSink>,
    themes: Vec<(&'static str, Theme)>,
    current: Mutex<usize>,
    subscribers: Subscribers<Theme>,
}

impl ThemeStore {
    /// Build the fixed registry with `"dark"` current. No presentation
    /// state is touched until [`ThemeStore::activate`] or
    /// [`ThemeStore::set_theme`] runs.
    pub fn new(storage: Arc<dyn StorageAdapter>, sink: Arc<dyn StyleSink>) -> Self {
        let themes = vec![
            ("dark", Theme::dark()),
            ("light", Theme::light()),
            ("high-contrast", Theme::high_contrast()),
        ];
        Self {
            storage,
            sink,
            themes,
            current: Mutex::new(0),
            subscribers: Subscribers::new(),
        }
    }

    /// Apply the current theme to the sink and notify subscribers. Called
    /// once by the composition root after subscribers have registered.
    pub fn activate(&self) {
        let theme = self.current_theme();
        self.apply(&theme);
        self.subscribers.notify(&theme);
    }

    /// Switch to the named theme: apply its properties, persist the name,
    /// and notify subscribers with the full theme. An unknown name is a
    /// silent no-op.
    pub fn set_theme(&self, name: &str) {
        let Some(index) = self.themes.iter().position(|(key, _)| *key == name) else {
            log::debug!("Ignoring unknown theme '{name}'");
            return;
        };
        *self.current.lock() = index;

        let theme = self.themes[index].1.clone();
        self.apply(&theme);
        self.storage.save(PREFERRED_THEME_KEY, name);
        self.subscribers.notify(&theme);
    }

    /// Copy of the current theme record.
    pub fn current_theme(&self) -> Theme {
        self.themes[*self.current.lock()].1.clone()
    }

    /// Theme names in registry order.
    pub fn available_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|(key, _)| *key).collect()
    }

    /// Register a change callback invoked with the full theme record after
    /// every theme application.
    pub fn on_theme_change(&self, callback: impl FnMut(&Theme) + Send + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// See [`themes::generate_color_palette`].
    pub fn generate_color_palette(&self, base: &str) -> Vec<String> {
        themes::generate_color_palette(base)
    }

    fn apply(&self, theme: &Theme) {
        let colors = match serde_json::to_value(&theme.colors) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to flatten theme '{}': {e}", theme.name);
                return;
            }
        };
        if let serde_json::Value::Object(map) = colors {
            for (key, child) in &map {
                self.write_properties(&format!("--{key}"), child);
            }
        }
    }

    fn write_properties(&self, name: &str, value: &serde_json::Value) {
        match value {
            serde_json::Value::String(color) => self.sink.set_property(name, color),
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    self.write_properties(&format!("{name}-{key}"), child);
                }
            }
            _ => {}
        }
    }
}
