//! Error types for OUI registry loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an OUI registry
#[derive(Debug, Error)]
pub enum OuiError {
    /// Failed to open or read a registry file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV data
    #[error("invalid registry CSV: {0}")]
    Csv(#[from] csv::Error),
}
