//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading tree data.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The tree file could not be read.
    #[error("Failed to read tree file '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree data was not a valid JSON node list.
    #[error("Invalid tree data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors returned by direct form-store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No field with this name has been registered or given a default.
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
}
