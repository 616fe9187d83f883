//! Summary view of the manifest served at the root path.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::model::Manifest;

/// A short overview of the server: identity, endpoints and tool names.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSummary {
    pub name: String,
    pub version: String,
    pub description: String,
    pub entry_point: String,
    pub resources: Vec<String>,
    pub tools: Vec<String>,
    /// Time the summary was produced (RFC 3339, UTC).
    pub timestamp: String,
}

impl ServerSummary {
    /// Build a summary stamped with the current time.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            description: manifest.description.clone(),
            entry_point: manifest.entry_point.clone(),
            resources: manifest
                .resource_endpoints()
                .into_iter()
                .map(String::from)
                .collect(),
            tools: manifest.tool_names().into_iter().map(String::from).collect(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
