//! Error taxonomy for toggle configuration.
//!
//! Toggle evaluation itself never fails. These errors only arise at the
//! edges: parsing identity names and loading or querying a catalog.

use std::path::PathBuf;

/// Errors produced while reading or querying toggle configuration.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("unknown build identity: {0}")]
    UnknownIdentity(String),

    #[error("unknown toggle: {0}")]
    UnknownToggle(String),

    #[error("invalid toggle catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read toggle catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for toggle configuration operations.
pub type Result<T> = std::result::Result<T, ToggleError>;
