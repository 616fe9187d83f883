//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed set of tools the server can run
//! - Dispatch of invocations by exact tool name
//! - Tool descriptors for the built-in manifest

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::definitions::{SentimentCheckTool, SummarizeFeedbackTool};
use super::error::ToolError;
use crate::core::config::ToolsConfig;
use crate::domains::manifest::ToolDescriptor;

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    config: Arc<ToolsConfig>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<ToolsConfig>) -> Self {
        Self { config }
    }

    /// Get all tool names, in manifest order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![SummarizeFeedbackTool::NAME, SentimentCheckTool::NAME]
    }

    /// Whether a tool with this exact name can be invoked.
    pub fn contains(name: &str) -> bool {
        Self::tool_names().contains(&name)
    }

    /// Get all tool descriptors.
    ///
    /// This is the source of the built-in manifest's tool list.
    pub fn descriptors() -> Vec<ToolDescriptor> {
        vec![
            SummarizeFeedbackTool::to_descriptor(),
            SentimentCheckTool::to_descriptor(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub fn call_tool(&self, name: &str, params: &Map<String, Value>) -> Result<Value, ToolError> {
        match name {
            SummarizeFeedbackTool::NAME => {
                info!("Invoking {}", name);
                Ok(SummarizeFeedbackTool::handle(params, &self.config))
            }
            SentimentCheckTool::NAME => {
                info!("Invoking {}", name);
                Ok(SentimentCheckTool::handle(params, &self.config))
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
