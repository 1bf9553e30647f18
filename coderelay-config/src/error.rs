//! Typed error variants for the coderelay-config crate.
//!
//! Storage errors never escape the [`crate::storage::StorageAdapter`]
//! surface: `load` and `save` catch them, log, and degrade to "no prior
//! state" / "skip persistence". They are public so alternative adapters can
//! reuse the same taxonomy and so callers can match on snippet failures.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or writing a storage file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred reading or writing a storage file.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key contains path separators or `..` and would resolve outside
    /// the storage directory.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Errors produced by the snippet library.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// No snippet is registered under the given id.
    #[error("snippet not found: {0}")]
    NotFound(String),

    /// An import payload was not a valid snippet collection.
    #[error("invalid snippets payload: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}
