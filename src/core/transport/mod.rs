//! Transport layer for the server.
//!
//! The server speaks plain JSON over HTTP. This module owns the axum
//! router, the mapping of domain errors to HTTP responses and the
//! listener lifecycle.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
