//! Resource definitions module.
//!
//! Each resource is defined in its own file with its manifest metadata
//! and its data.

pub mod insights;

pub use insights::{InsightRecord, InsightsResource};

use crate::domains::manifest::ResourceDescriptor;

/// Trait for resource definitions.
///
/// Each resource provides the metadata advertised in the manifest.
pub trait ResourceDefinition {
    /// The name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The HTTP path serving the resource.
    const ENDPOINT: &'static str;

    /// Describe this resource for the manifest.
    fn to_descriptor() -> ResourceDescriptor {
        ResourceDescriptor {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            endpoint: Self::ENDPOINT.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}
