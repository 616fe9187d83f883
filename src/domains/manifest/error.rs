//! Manifest-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the manifest at startup.
///
/// All of them are fatal: the server never starts with a partial manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not a valid manifest document.
    #[error("Failed to parse manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two tools share the same name.
    #[error("Duplicate tool name in manifest: {0}")]
    DuplicateTool(String),
}
