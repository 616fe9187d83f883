//! Insights resource definition.
//!
//! Mock customer feedback records with a precomputed sentiment label.

use serde::{Deserialize, Serialize};

use super::ResourceDefinition;
use crate::domains::tools::Sentiment;

/// A single feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub id: u64,
    pub customer: String,
    pub feedback: String,
    pub sentiment: Sentiment,
    /// ISO-8601 creation time.
    pub created_at: String,
}

/// Insights resource.
pub struct InsightsResource;

impl ResourceDefinition for InsightsResource {
    const NAME: &'static str = "insight_resource";
    const DESCRIPTION: &'static str = "Example insight resource endpoint";
    const ENDPOINT: &'static str = "/resources/insights";
}

const SEED: &[(u64, &str, &str, Sentiment, &str)] = &[
    (
        1,
        "Acme Corp",
        "The new dashboard is great, our team loves the export feature.",
        Sentiment::Positive,
        "2024-05-01T09:15:00Z",
    ),
    (
        2,
        "Globex",
        "Login is slow in the mornings and we hit a bug with SSO.",
        Sentiment::Negative,
        "2024-05-02T14:02:00Z",
    ),
    (
        3,
        "Initech",
        "Reports arrive on schedule. Nothing else to add.",
        Sentiment::Neutral,
        "2024-05-03T11:47:00Z",
    ),
    (
        4,
        "Umbrella Ltd",
        "Excellent onboarding, the support staff were amazing.",
        Sentiment::Positive,
        "2024-05-04T16:30:00Z",
    ),
    (
        5,
        "Hooli",
        "Search results are poor for long queries.",
        Sentiment::Negative,
        "2024-05-05T08:05:00Z",
    ),
];

impl InsightsResource {
    /// The records seeded at startup when no data file is configured.
    pub fn seed() -> Vec<InsightRecord> {
        SEED.iter()
            .map(|&(id, customer, feedback, sentiment, created_at)| InsightRecord {
                id,
                customer: customer.to_string(),
                feedback: feedback.to_string(),
                sentiment,
                created_at: created_at.to_string(),
            })
            .collect()
    }
}
