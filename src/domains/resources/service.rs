//! Insight service implementation.
//!
//! The InsightService owns the insight records for the lifetime of the
//! process and serves bounded views of them.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::definitions::{InsightRecord, InsightsResource};
use super::error::ResourceError;
use crate::core::config::ResourcesConfig;

/// A prefix of the insight records plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsPage {
    pub data: Vec<InsightRecord>,
    /// Number of stored records, not the length of `data`.
    pub count: usize,
}

/// Service for listing insight records.
#[derive(Debug, Clone)]
pub struct InsightService {
    records: Vec<InsightRecord>,
    default_limit: usize,
}

impl InsightService {
    /// Create a service over the given records.
    pub fn new(records: Vec<InsightRecord>, default_limit: usize) -> Self {
        Self {
            records,
            default_limit,
        }
    }

    /// Create the service described by the configuration.
    ///
    /// Records come from `insights_path` when set, otherwise from the
    /// built-in seed.
    pub fn from_config(config: &ResourcesConfig) -> Result<Self, ResourceError> {
        let records = match &config.insights_path {
            Some(path) => Self::read_records(path)?,
            None => InsightsResource::seed(),
        };
        info!("Initializing InsightService with {} records", records.len());
        Ok(Self::new(records, config.default_limit))
    }

    fn read_records(path: &Path) -> Result<Vec<InsightRecord>, ResourceError> {
        info!("Loading insights from {:?}", path);
        let raw = std::fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ResourceError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The first `limit` records (default limit when `None`).
    pub fn list(&self, limit: Option<usize>) -> InsightsPage {
        let limit = limit.unwrap_or(self.default_limit);
        InsightsPage {
            data: self.records.iter().take(limit).cloned().collect(),
            count: self.records.len(),
        }
    }
}
