//! Error types for schema loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source document could not be read.
    #[error("cannot read schema document '{path}': {source}")]
    Io {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A source document is not valid JSON or does not match the schema
    /// document shape (including a missing mandatory `name` field).
    #[error("invalid schema document '{path}': {source}")]
    Parse {
        /// Path of the malformed document.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Creates an IO error for the given document path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error for the given document path.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
