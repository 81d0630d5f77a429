//! Dataset loading error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a dataset file
///
/// Either variant aborts startup; nothing is retried.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file is missing or unreadable
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of the expected records
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataLoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataLoadError::Io { path, .. } | DataLoadError::Parse { path, .. } => path,
        }
    }

    /// Checks if the file could not be read at all
    pub fn is_io(&self) -> bool {
        matches!(self, DataLoadError::Io { .. })
    }
}
