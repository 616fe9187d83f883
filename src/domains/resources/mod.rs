//! Resources domain module.
//!
//! Resources are read-only data endpoints, distinct from invocable tools.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `service.rs` - Insight listing
//! - `error.rs` - Resource-specific error types

pub mod definitions;
mod error;
mod service;

pub use definitions::{InsightRecord, InsightsResource, ResourceDefinition};
pub use error::ResourceError;
pub use service::{InsightService, InsightsPage};
