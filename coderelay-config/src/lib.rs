//! Settings, theme, and snippet stores for the CodeRelay editor shell.
//!
//! This crate backs the preferences surface of the application. It includes:
//!
//! - Typed settings records for the editor, terminal, and chat panels
//! - Theme definitions and presentation-property application
//! - Durable key-value persistence behind a storage trait
//! - Change subscriptions with synchronous, ordered fan-out
//! - An in-memory snippet library
//!
//! The stores are constructed once by the application's composition root and
//! handed to consumers by reference; nothing here relies on import-time side
//! effects. All operations are synchronous and intended for a single UI
//! thread.

pub mod defaults;
mod error;
pub mod settings;
pub mod settings_store;
pub mod snippets;
pub mod storage;
mod subscribers;
pub mod theme_store;
pub mod themes;
mod types;

// Re-export main types for convenience
pub use error::{SnippetError, StorageError};
pub use settings::{
    ChatSettings, ChatSettingsPatch, EditorSettings, EditorSettingsPatch, Settings, SettingsPatch,
    TerminalSettings, TerminalSettingsPatch,
};
pub use settings_store::{SETTINGS_KEY, SettingsStore};
pub use snippets::{Snippet, SnippetDraft, SnippetLibrary, SnippetPatch};
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use subscribers::Subscription;
pub use theme_store::{NullSink, PREFERRED_THEME_KEY, StyleSink, ThemeStore};
pub use themes::{Color, Theme, ThemeColors, generate_color_palette};
pub use types::CursorStyle;
