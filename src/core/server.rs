//! Server state and lifecycle.
//!
//! `FeedbackServer` holds everything loaded at startup: the manifest (and
//! its pre-rendered JSON), the tool registry and the insight records.
//! It is cheap to clone; all state sits behind `Arc` and is never
//! mutated after construction.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    manifest::{Manifest, ServerSummary},
    resources::{InsightService, InsightsPage},
    tools::{ToolError, ToolRegistry},
};

/// The main server handle shared by all HTTP handlers.
#[derive(Debug, Clone)]
pub struct FeedbackServer {
    /// The manifest loaded at startup.
    manifest: Arc<Manifest>,

    /// The manifest rendered once, so every response is byte-identical.
    manifest_json: Arc<str>,

    /// Tool dispatch.
    tools: ToolRegistry,

    /// Service for the insights resource.
    insights: Arc<InsightService>,
}

impl FeedbackServer {
    /// Create a new server, loading the manifest and resource data.
    ///
    /// Any failure here is fatal: the server never starts half-loaded.
    pub fn new(config: Config) -> Result<Self> {
        let entry_point = config.transport.entry_point();
        let manifest = Manifest::load(config.manifest.path.as_deref(), &entry_point)?;
        let manifest_json: Arc<str> = serde_json::to_string(&manifest)?.into();
        info!(
            "Loaded manifest '{}' v{} with {} tools",
            manifest.name,
            manifest.version,
            manifest.tools.len()
        );

        let insights = InsightService::from_config(&config.resources)?;

        Ok(Self {
            tools: ToolRegistry::new(Arc::new(config.tools)),
            insights: Arc::new(insights),
            manifest: Arc::new(manifest),
            manifest_json,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    /// The manifest document.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The manifest as a JSON string.
    pub fn manifest_json(&self) -> &str {
        &self.manifest_json
    }

    /// Invoke a tool by name.
    #[instrument(skip(self, params))]
    pub fn call_tool(
        &self,
        name: &str,
        params: &Map<String, Value>,
    ) -> std::result::Result<Value, ToolError> {
        self.tools.call_tool(name, params)
    }

    /// List insight records.
    pub fn list_insights(&self, limit: Option<usize>) -> InsightsPage {
        self.insights.list(limit)
    }

    /// Summary of the server, stamped with the current time.
    pub fn summary(&self) -> ServerSummary {
        ServerSummary::from_manifest(&self.manifest)
    }
}
