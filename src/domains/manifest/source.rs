//! Manifest sources: the built-in document and JSON files.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use super::error::ManifestError;
use super::model::{Authentication, Manifest};
use crate::domains::resources::{InsightsResource, ResourceDefinition};
use crate::domains::tools::ToolRegistry;

/// Default server name advertised in the manifest.
pub const DEFAULT_NAME: &str = "local-mcp-server";

impl Manifest {
    /// The manifest compiled into the binary, advertising `entry_point`.
    pub fn builtin(entry_point: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Local MCP server exposing summarize and sentiment analysis tools"
                .to_string(),
            entry_point: entry_point.into(),
            protocol: "http/1.1".to_string(),
            authentication: Authentication::none(),
            tools: ToolRegistry::descriptors(),
            resources: vec![InsightsResource::to_descriptor()],
            extra: serde_json::Map::new(),
        }
    }

    /// Read a manifest from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        info!("Loading manifest from {:?}", path);

        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: Manifest =
            serde_json::from_str(&raw).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Load from `path` when given, otherwise use the built-in manifest
    /// advertising `entry_point`. A file keeps its own entry point.
    pub fn load(path: Option<&Path>, entry_point: &str) -> Result<Self, ManifestError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                info!("Using built-in manifest at {}", entry_point);
                Ok(Self::builtin(entry_point))
            }
        }
    }

    /// Check the manifest for structural problems.
    ///
    /// Tools the dispatcher cannot run are only reported; invoking them
    /// fails like any other unknown tool.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.name.as_str()) {
                return Err(ManifestError::DuplicateTool(tool.name.clone()));
            }
            if !ToolRegistry::contains(&tool.name) {
                warn!("Manifest lists tool '{}' with no implementation", tool.name);
            }
        }
        Ok(())
    }
}
