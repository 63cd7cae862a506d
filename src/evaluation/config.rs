use serde::{Deserialize, Serialize};

/// Fixed regulatory count of affected individuals at or above which a
/// scenario fails the bulk-data judgment.
pub const BULK_THRESHOLD: u64 = 100_000;

/// Threshold configuration describing the bulk rule and its risk cut points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub bulk_threshold: u64,
    /// Utilization percentage above which an entry grades Medium Risk.
    pub medium_utilization_pct: f64,
    /// Utilization percentage above which an entry grades High Risk.
    pub high_utilization_pct: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            bulk_threshold: BULK_THRESHOLD,
            medium_utilization_pct: 20.0,
            high_utilization_pct: 40.0,
        }
    }
}
