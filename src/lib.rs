//! Feedback tool server library.
//!
//! A small HTTP server that advertises its tools and resources through a
//! manifest, runs two text tools (`summarize_feedback`,
//! `sentiment_check`) and serves a mock insights resource.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, server state and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **manifest**: The discovery document and the root summary
//!   - **tools**: Invocable tools and their dispatch
//!   - **resources**: Read-only data endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use feedback_mcp_server::core::{Config, FeedbackServer, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = FeedbackServer::new(config.clone())?;
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, FeedbackServer, Result};
