//! Configuration management for the server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use crate::domains::tools::SentimentPrecedence;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the manifest comes from.
    pub manifest: ManifestConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,
}

/// Manifest source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// JSON manifest file. The built-in manifest is used when unset.
    pub path: Option<PathBuf>,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// JSON file of insight records. The built-in seed is used when unset.
    pub insights_path: Option<PathBuf>,

    /// Number of insights returned when the request gives no limit.
    pub default_limit: usize,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Texts longer than this many characters are truncated.
    pub summary_threshold: usize,

    /// Summarize empty input to "Empty input." instead of "".
    pub empty_placeholder: bool,

    /// Keyword list consulted first by the sentiment check.
    pub sentiment_precedence: SentimentPrecedence,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            insights_path: None,
            default_limit: 10,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            summary_threshold: 80,
            empty_placeholder: true,
            sentiment_precedence: SentimentPrecedence::Negative,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from the environment (and `.env`).
    ///
    /// Needed before the subscriber exists, so the rest of `Config::from_env`
    /// can report what it reads.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_MANIFEST_PATH`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(path) = std::env::var("MCP_MANIFEST_PATH") {
            info!("Manifest file configured: {}", path);
            config.manifest.path = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("MCP_INSIGHTS_PATH") {
            info!("Insights file configured: {}", path);
            config.resources.insights_path = Some(PathBuf::from(path));
        }

        if let Some(limit) = parse_env("MCP_INSIGHTS_DEFAULT_LIMIT") {
            config.resources.default_limit = limit;
        }

        if let Some(threshold) = parse_env("MCP_SUMMARY_THRESHOLD") {
            config.tools.summary_threshold = threshold;
        }

        if let Ok(flag) = std::env::var("MCP_SUMMARY_EMPTY_PLACEHOLDER") {
            config.tools.empty_placeholder = parse_flag(&flag);
        }

        if let Some(precedence) = parse_env("MCP_SENTIMENT_PRECEDENCE") {
            config.tools.sentiment_precedence = precedence;
        }

        config.transport = HttpConfig::from_env();

        config
    }
}

/// Read and parse an environment variable.
///
/// Unset variables yield `None` silently; unparseable ones are reported
/// and ignored so the default stays in effect.
pub(crate) fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
            None
        }
    }
}

/// Interpret a boolean flag; anything but "false"/"0" is on.
pub(crate) fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}

// Mutex to ensure env var tests run serially across modules
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory log sink for asserting on emitted events.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    const VARS: &[&str] = &[
        "MCP_MANIFEST_PATH",
        "MCP_INSIGHTS_PATH",
        "MCP_INSIGHTS_DEFAULT_LIMIT",
        "MCP_SUMMARY_THRESHOLD",
        "MCP_SUMMARY_EMPTY_PLACEHOLDER",
        "MCP_SENTIMENT_PRECEDENCE",
        "MCP_LOG_LEVEL",
        "MCP_HTTP_HOST",
        "MCP_HTTP_PORT",
        "MCP_HTTP_CORS",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.manifest.path.is_none());
        assert_eq!(config.resources.default_limit, 10);
        assert_eq!(config.tools.summary_threshold, 80);
        assert!(config.tools.empty_placeholder);
        assert_eq!(
            config.tools.sentiment_precedence,
            SentimentPrecedence::Negative
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_env_without_vars_matches_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.tools.summary_threshold, 80);
        assert_eq!(config.transport.port, 8080);
    }

    #[test]
    fn test_tools_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SUMMARY_THRESHOLD", "75");
            std::env::set_var("MCP_SUMMARY_EMPTY_PLACEHOLDER", "false");
            std::env::set_var("MCP_SENTIMENT_PRECEDENCE", "positive");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.summary_threshold, 75);
        assert!(!config.tools.empty_placeholder);
        assert_eq!(
            config.tools.sentiment_precedence,
            SentimentPrecedence::Positive
        );
        clear_env();
    }

    #[test]
    fn test_paths_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_MANIFEST_PATH", "/etc/feedback/manifest.json");
            std::env::set_var("MCP_INSIGHTS_PATH", "/etc/feedback/insights.json");
            std::env::set_var("MCP_INSIGHTS_DEFAULT_LIMIT", "3");
        }
        let config = Config::from_env();
        assert_eq!(
            config.manifest.path,
            Some(PathBuf::from("/etc/feedback/manifest.json"))
        );
        assert_eq!(
            config.resources.insights_path,
            Some(PathBuf::from("/etc/feedback/insights.json"))
        );
        assert_eq!(config.resources.default_limit, 3);
        clear_env();
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SUMMARY_THRESHOLD", "eighty");
            std::env::set_var("MCP_SENTIMENT_PRECEDENCE", "sideways");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.summary_threshold, 80);
        assert_eq!(
            config.tools.sentiment_precedence,
            SentimentPrecedence::Negative
        );
        clear_env();
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        assert_eq!(Config::from_env().logging.level, "debug");
        clear_env();
    }

    #[test]
    fn test_invalid_values_are_logged() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SUMMARY_THRESHOLD", "eighty");
            std::env::set_var("MCP_SENTIMENT_PRECEDENCE", "sideways");
        }

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, Config::from_env);
        clear_env();

        assert_eq!(config.tools.summary_threshold, 80);
        let output = logs.contents();
        assert!(output.contains("Ignoring invalid MCP_SUMMARY_THRESHOLD"), "{}", output);
        assert!(output.contains("Ignoring invalid MCP_SENTIMENT_PRECEDENCE"), "{}", output);
        assert!(output.contains("WARN"), "{}", output);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" 0 "));
    }
}
