//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, error handling, the server state
//! and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::FeedbackServer;
pub use transport::{HttpConfig, HttpTransport};
