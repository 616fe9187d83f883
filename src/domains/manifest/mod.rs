//! Manifest domain module.
//!
//! The manifest is the discovery document clients fetch to learn which
//! tools and resources this server offers. It is loaded once at startup,
//! from the built-in definition or a JSON file, and never changes.

mod error;
mod model;
mod source;
mod summary;

pub use error::ManifestError;
pub use model::{Authentication, Manifest, ResourceDescriptor, ToolDescriptor};
pub use source::DEFAULT_NAME;
pub use summary::ServerSummary;
