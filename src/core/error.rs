//! Error types and handling for the server.
//!
//! This module defines a unified error type for everything that can stop
//! the server from starting. Request-time failures never reach it: tool
//! errors are mapped to HTTP responses by the transport.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest could not be loaded at startup.
    #[error("Manifest error: {0}")]
    Manifest(#[from] crate::domains::manifest::ManifestError),

    /// Resource data could not be loaded at startup.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::manifest::ManifestError;

    #[test]
    fn test_manifest_error_display() {
        let err: Error = ManifestError::DuplicateTool("x".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Manifest error: Duplicate tool name in manifest: x"
        );
    }
}
