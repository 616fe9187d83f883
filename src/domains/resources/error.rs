//! Resource-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading resource data.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A data file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file does not hold the expected records.
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
