//! Loader error types.

use std::path::PathBuf;

/// Errors that can occur when reading a network document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid network description
    #[error("invalid network document: {0}")]
    Json(#[from] serde_json::Error),
}
