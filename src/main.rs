//! Server entry point.
//!
//! Initializes logging, loads configuration, builds the server state and
//! serves HTTP until interrupted.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use feedback_mcp_server::core::config::LoggingConfig;
use feedback_mcp_server::core::{Config, FeedbackServer, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so configuration problems are reported
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    // Manifest and data are loaded here; failure stops the process
    let server =
        FeedbackServer::new(config.clone()).context("failed to load server configuration")?;

    info!("Starting {} v{}", server.name(), server.version());
    info!("Transport: {}", config.transport.description());

    HttpTransport::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
