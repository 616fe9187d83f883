//! Manifest document types.
//!
//! Fields this server does not interpret are kept in `extra` and written
//! back out in their original order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The discovery document describing this server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub entry_point: String,
    pub protocol: String,
    pub authentication: Authentication,
    pub tools: Vec<ToolDescriptor>,
    pub resources: Vec<ResourceDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authentication scheme advertised to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Authentication {
    pub fn none() -> Self {
        Self {
            kind: "none".to_string(),
            extra: Map::new(),
        }
    }
}

/// A tool entry in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique name used for dispatch.
    pub name: String,
    pub description: String,
    /// JSON-schema-like description of the accepted parameters.
    pub args: Value,
    /// JSON-schema-like description of the result.
    pub returns: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A resource entry in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    pub description: String,
    /// Path of the endpoint serving the resource.
    pub endpoint: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Names of all tools, in manifest order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Endpoints of all resources, in manifest order.
    pub fn resource_endpoints(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.endpoint.as_str()).collect()
    }
}
