//! Summarize feedback tool definition.
//!
//! Shortens a feedback text to a fixed number of characters.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::{TextParams, text_args_schema};
use crate::core::config::ToolsConfig;
use crate::domains::manifest::ToolDescriptor;

/// Result of the summarize tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryOutput {
    pub summary: String,
}

/// Summarize feedback tool - truncates long text behind an ellipsis.
pub struct SummarizeFeedbackTool;

impl SummarizeFeedbackTool {
    /// Tool name as advertised in the manifest.
    pub const NAME: &'static str = "summarize_feedback";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Summarizes user feedback text.";

    /// Returned for empty input when the placeholder is enabled.
    pub const EMPTY_PLACEHOLDER: &'static str = "Empty input.";

    const ELLIPSIS: &'static str = "...";

    /// Execute the tool logic.
    ///
    /// Lengths are counted in characters, never bytes, so multi-byte
    /// input is never split inside a code point.
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &TextParams, config: &ToolsConfig) -> SummaryOutput {
        let text = params.text.as_str();

        if text.is_empty() && config.empty_placeholder {
            return SummaryOutput {
                summary: Self::EMPTY_PLACEHOLDER.to_string(),
            };
        }

        let threshold = config.summary_threshold;
        let summary = match text.char_indices().nth(threshold) {
            Some((cut, _)) => {
                debug!("Truncating text to {} characters", threshold);
                format!("{}{}", &text[..cut], Self::ELLIPSIS)
            }
            None => text.to_string(),
        };

        SummaryOutput { summary }
    }

    /// Dispatch handler: extract params and serialize the result.
    pub fn handle(params: &Map<String, Value>, config: &ToolsConfig) -> Value {
        let output = Self::execute(&TextParams::from_params(params), config);
        serde_json::json!(output)
    }

    /// Describe this tool for the manifest.
    pub fn to_descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            args: text_args_schema("Feedback text to summarize."),
            returns: serde_json::json!({
                "type": "object",
                "properties": {
                    "summary": { "type": "string" }
                }
            }),
            extra: Map::new(),
        }
    }
}
