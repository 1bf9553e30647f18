//! The settings store: typed configuration with persistence and change
//! subscriptions.
//!
//! Every mutation merges into the in-memory aggregate, persists the whole
//! record through the storage adapter, then synchronously notifies
//! subscribers in registration order. Persistence failures are logged by the
//! adapter and never abort the mutation or the notification.

use crate::settings::{
    ChatSettings, ChatSettingsPatch, EditorSettings, EditorSettingsPatch, Settings, SettingsPatch,
    TerminalSettings, TerminalSettingsPatch,
};
use crate::storage::StorageAdapter;
use crate::subscribers::{Subscribers, Subscription};
use parking_lot::Mutex;
use std::sync::Arc;

/// Storage key for the serialized settings aggregate.
pub const SETTINGS_KEY: &str = "settings";

/// Process-lifetime store for the [`Settings`] aggregate.
///
/// Constructed once by the composition root and handed to consumers by
/// reference. All operations are synchronous; subscriber callbacks must not
/// register or unregister subscriptions re-entrantly.
pub struct SettingsStore {
    storage: Arc<dyn StorageAdapter>,
    settings: Mutex<Settings>,
    subscribers: Subscribers<Settings>,
}

impl SettingsStore {
    /// Load persisted settings, merging them over the hardcoded defaults.
    ///
    /// An absent blob, or one that fails to parse, yields the defaults
    /// verbatim; the failure is logged and never propagated.
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        let settings = match storage.load(SETTINGS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Discarding unreadable settings blob: {e}");
                    Settings::default()
                }
            },
            None => Settings::default(),
        };
        Self {
            storage,
            settings: Mutex::new(settings),
            subscribers: Subscribers::new(),
        }
    }

    /// Defensive copy of the full settings record.
    pub fn settings(&self) -> Settings {
        self.settings.lock().clone()
    }

    pub fn editor_settings(&self) -> EditorSettings {
        self.settings.lock().editor.clone()
    }

    pub fn terminal_settings(&self) -> TerminalSettings {
        self.settings.lock().terminal.clone()
    }

    pub fn chat_settings(&self) -> ChatSettings {
        self.settings.lock().chat.clone()
    }

    /// Shallow-merge a top-level patch, persist, notify.
    pub fn update_settings(&self, patch: SettingsPatch) {
        self.mutate(|settings| patch.apply_to(settings));
    }

    pub fn update_editor_settings(&self, patch: EditorSettingsPatch) {
        self.mutate(|settings| patch.apply_to(&mut settings.editor));
    }

    pub fn update_terminal_settings(&self, patch: TerminalSettingsPatch) {
        self.mutate(|settings| patch.apply_to(&mut settings.terminal));
    }

    pub fn update_chat_settings(&self, patch: ChatSettingsPatch) {
        self.mutate(|settings| patch.apply_to(&mut settings.chat));
    }

    /// Replace the record with the hardcoded defaults, persist, notify.
    pub fn reset_settings(&self) {
        self.mutate(|settings| *settings = Settings::default());
    }

    pub fn set_theme(&self, theme: impl Into<String>) {
        let theme = theme.into();
        self.mutate(move |settings| settings.theme = theme);
    }

    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        self.mutate(move |settings| settings.language = language);
    }

    pub fn set_auto_update(&self, enabled: bool) {
        self.mutate(move |settings| settings.auto_update = enabled);
    }

    pub fn set_telemetry(&self, enabled: bool) {
        self.mutate(move |settings| settings.telemetry = enabled);
    }

    /// Pretty-printed JSON of the current record, for export to a file.
    pub fn export_settings(&self) -> String {
        let settings = self.settings.lock();
        match serde_json::to_string_pretty(&*settings) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize settings for export: {e}");
                String::new()
            }
        }
    }

    /// Parse an exported payload, merge it over the defaults, persist, and
    /// notify. Returns `false` and leaves state unchanged when the payload
    /// does not parse.
    pub fn import_settings(&self, raw: &str) -> bool {
        let imported: Settings = match serde_json::from_str(raw) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Rejecting settings import: {e}");
                return false;
            }
        };
        self.mutate(move |settings| *settings = imported);
        true
    }

    /// Register a change callback invoked with the full record after every
    /// successful mutation. The returned handle removes exactly this
    /// subscriber.
    pub fn on_settings_change(
        &self,
        callback: impl FnMut(&Settings) + Send + 'static,
    ) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Apply a mutation, persist the whole aggregate, then notify. The
    /// settings lock is released before persistence and notification so
    /// callbacks can call getters.
    fn mutate(&self, mutation: impl FnOnce(&mut Settings)) {
        let snapshot = {
            let mut settings = self.settings.lock();
            mutation(&mut settings);
            settings.clone()
        };
        self.persist(&snapshot);
        self.subscribers.notify(&snapshot);
    }

    fn persist(&self, settings: &Settings) {
        match serde_json::to_string(settings) {
            Ok(json) => {
                self.storage.save(SETTINGS_KEY, &json);
            }
            Err(e) => log::error!("Failed to serialize settings: {e}"),
        }
    }
}
