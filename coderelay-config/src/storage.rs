//! Durable key-value storage behind the settings and theme stores.
//!
//! The stores treat a failed load as "no prior state" and a failed save as a
//! silent no-op; failures are logged here and never propagate. There is no
//! retry policy.

use crate::error::StorageError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Boundary abstraction over durable key-value storage.
pub trait StorageAdapter: Send + Sync {
    /// Read the raw value stored under `key`. Returns `None` on absence or
    /// any failure.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Returns `false` on failure.
    fn save(&self, key: &str, value: &str) -> bool;
}

/// File-backed storage: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the per-user configuration directory
    /// (`~/.config/coderelay` on XDG platforms).
    pub fn default_location() -> Self {
        Self::new(Self::default_dir())
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn default_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("coderelay")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("coderelay")
            } else {
                PathBuf::from(".")
            }
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys name files directly; reject anything that could escape the
        // storage directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StorageError::Io { path, source })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Atomic save: write to temp file then rename to prevent corruption
        // on crash.
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).map_err(|source| StorageError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &path).map_err(|source| StorageError::Io { path, source })?;
        Ok(())
    }
}

impl StorageAdapter for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to load '{key}': {e}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> bool {
        match self.write(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save '{key}': {e}");
                false
            }
        }
    }
}

/// In-memory storage for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> bool {
        self.entries.lock().insert(key.to_string(), value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.save("settings", "{\"theme\":\"dark\"}"));
        assert_eq!(
            storage.load("settings").as_deref(),
            Some("{\"theme\":\"dark\"}")
        );
    }

    #[test]
    fn file_storage_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.load("settings"), None);
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.save("preferred-theme", "dark"));
        assert!(storage.save("preferred-theme", "light"));
        assert_eq!(storage.load("preferred-theme").as_deref(), Some("light"));
    }

    #[test]
    fn file_storage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert!(storage.save("settings", "{}"));
        assert_eq!(storage.load("settings").as_deref(), Some("{}"));
    }

    #[test]
    fn file_storage_rejects_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(!storage.save("../escape", "x"));
        assert!(!storage.save("a/b", "x"));
        assert!(!storage.save("", "x"));
        assert_eq!(storage.load("../escape"), None);
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("settings"), None);
        assert!(storage.save("settings", "{}"));
        assert_eq!(storage.load("settings").as_deref(), Some("{}"));
    }
}
