//! Sentiment check tool definition.
//!
//! Classifies text by looking for fixed keywords. This is a keyword
//! membership test, not a language model: each keyword is matched as a
//! substring of the lower-cased input, so "buggy" matches "bug".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::{TextParams, text_args_schema};
use crate::core::config::ToolsConfig;
use crate::domains::manifest::ToolDescriptor;

/// Keywords that mark a text as negative.
pub const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "poor", "hate", "slow", "bug", "issue"];

/// Keywords that mark a text as positive.
pub const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "love", "amazing"];

/// Sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which keyword list is consulted first.
///
/// Text containing words from both lists gets the label of the list
/// checked first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentPrecedence {
    #[default]
    Negative,
    Positive,
}

impl FromStr for SentimentPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "negative" => Ok(Self::Negative),
            "positive" => Ok(Self::Positive),
            other => Err(format!("unknown sentiment precedence: {}", other)),
        }
    }
}

/// Result of the sentiment tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentOutput {
    pub sentiment: Sentiment,
}

/// Sentiment check tool - positive/neutral/negative keyword classifier.
pub struct SentimentCheckTool;

impl SentimentCheckTool {
    /// Tool name as advertised in the manifest.
    pub const NAME: &'static str = "sentiment_check";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Detects sentiment (positive/neutral/negative) in text.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(precedence = ?config.sentiment_precedence))]
    pub fn execute(params: &TextParams, config: &ToolsConfig) -> SentimentOutput {
        let text = params.text.to_lowercase();

        let order = match config.sentiment_precedence {
            SentimentPrecedence::Negative => [
                (NEGATIVE_WORDS, Sentiment::Negative),
                (POSITIVE_WORDS, Sentiment::Positive),
            ],
            SentimentPrecedence::Positive => [
                (POSITIVE_WORDS, Sentiment::Positive),
                (NEGATIVE_WORDS, Sentiment::Negative),
            ],
        };

        let sentiment = order
            .iter()
            .find(|(words, _)| words.iter().any(|word| text.contains(word)))
            .map(|(_, sentiment)| *sentiment)
            .unwrap_or(Sentiment::Neutral);

        debug!("Classified text as {}", sentiment);
        SentimentOutput { sentiment }
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
            args: text_args_schema("Input text to analyze."),
            returns: serde_json::json!({
                "type": "object",
                "properties": {
                    "sentiment": { "type": "string" }
                }
            }),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Sentiment {
        check_with(text, SentimentPrecedence::default())
    }

    fn check_with(text: &str, precedence: SentimentPrecedence) -> Sentiment {
        let config = ToolsConfig {
            sentiment_precedence: precedence,
            ..ToolsConfig::default()
        };
        let params = TextParams {
            text: text.to_string(),
        };
        SentimentCheckTool::execute(&params, &config).sentiment
    }

    #[test]
    fn test_positive_text() {
        assert_eq!(
            check("This is absolutely amazing and fast!"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative_text() {
        assert_eq!(check("The app is slow and buggy"), Sentiment::Negative);
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(check("It works as expected"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(check(""), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(check("I LOVE it"), Sentiment::Positive);
        assert_eq!(check("TERRIBLE support"), Sentiment::Negative);
    }

    #[test]
    fn test_every_keyword_matches_alone() {
        for word in NEGATIVE_WORDS {
            assert_eq!(check(word), Sentiment::Negative, "word: {}", word);
        }
        for word in POSITIVE_WORDS {
            assert_eq!(check(word), Sentiment::Positive, "word: {}", word);
        }
    }

    #[test]
    fn test_mixed_text_negative_first_by_default() {
        assert_eq!(check("Great design but slow"), Sentiment::Negative);
    }

    #[test]
    fn test_mixed_text_positive_first() {
        assert_eq!(
            check_with("Great design but slow", SentimentPrecedence::Positive),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_precedence_irrelevant_for_single_list() {
        assert_eq!(
            check_with("love it", SentimentPrecedence::Negative),
            Sentiment::Positive
        );
        assert_eq!(
            check_with("hate it", SentimentPrecedence::Positive),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_precedence_from_str() {
        assert_eq!(
            "Positive".parse::<SentimentPrecedence>(),
            Ok(SentimentPrecedence::Positive)
        );
        assert_eq!(
            " negative ".parse::<SentimentPrecedence>(),
            Ok(SentimentPrecedence::Negative)
        );
        assert!("sideways".parse::<SentimentPrecedence>().is_err());
    }

    #[test]
    fn test_handle_serializes_lowercase() {
        let mut params = Map::new();
        params.insert("text".to_string(), Value::from("good stuff"));
        let value = SentimentCheckTool::handle(&params, &ToolsConfig::default());
        assert_eq!(value, serde_json::json!({ "sentiment": "positive" }));
    }
}
