//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file with its name, description,
//! argument/return schemas and execution logic.

pub mod sentiment;
pub mod summarize;

pub use sentiment::{Sentiment, SentimentCheckTool, SentimentOutput, SentimentPrecedence};
pub use summarize::{SummarizeFeedbackTool, SummaryOutput};

use serde_json::{Map, Value};

/// Parameters shared by the text-processing tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextParams {
    /// Input text. Absent or non-string values become an empty string.
    pub text: String,
}

impl TextParams {
    /// Extract the `text` parameter from an invocation's parameter map.
    pub fn from_params(params: &Map<String, Value>) -> Self {
        let text = params
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { text }
    }
}

/// Build the `args` schema used by both text tools.
fn text_args_schema(description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "description": description
            }
        },
        "required": ["text"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_param_present() {
        let p = TextParams::from_params(&params(json!({ "text": "hello" })));
        assert_eq!(p.text, "hello");
    }

    #[test]
    fn test_text_param_missing_defaults_to_empty() {
        let p = TextParams::from_params(&params(json!({ "other": 1 })));
        assert_eq!(p, TextParams::default());
    }

    #[test]
    fn test_text_param_wrong_type_defaults_to_empty() {
        let p = TextParams::from_params(&params(json!({ "text": 42 })));
        assert!(p.text.is_empty());
    }
}
