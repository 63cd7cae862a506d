mod config;
mod policy;
mod rules;

pub use config::{EvaluationConfig, BULK_THRESHOLD};
pub use policy::{ComplianceStatus, RiskLevel};

use serde::{Deserialize, Serialize};

use crate::domain::{AccessScenario, DataEntry, IdentifierCounts};
use crate::intake::EntryDraft;
use policy::{combination_explanation, judge, scope_explanation};

/// Stateless evaluator applying the bulk-threshold rule to a counter record.
/// Pure and total: callers sanitize numeric input before it gets here, so
/// scoring cannot fail.
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, scenario: AccessScenario, counts: &IdentifierCounts) -> EvaluationResult {
        let signals = rules::combine(counts);
        let judgment = judge(&signals, &self.config);

        EvaluationResult {
            estimated_persons: signals.estimated_persons,
            calc_method: signals.calc_method,
            status: judgment.status,
            risk_level: judgment.risk_level,
            utilization: judgment.utilization,
            gap: judgment.gap,
            cpi_trigger: signals.cpi_trigger,
            cpi_explanation: combination_explanation(&signals),
            scope_explanation: scope_explanation(scenario).to_string(),
        }
    }

    /// Live score for the form's current draft.
    pub fn score_draft(&self, draft: &EntryDraft) -> EvaluationResult {
        self.score(draft.scenario, &draft.counts)
    }

    /// Re-score a stored entry for the history view.
    pub fn score_entry(&self, entry: &DataEntry) -> EvaluationResult {
        self.score(entry.scenario, &entry.counts)
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}

/// How the combined count was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcMethod {
    #[serde(rename = "intersection")]
    Intersection,
    #[serde(rename = "no-combination")]
    NoCombination,
}

/// Derived threshold assessment; recomputed on demand from an entry or draft,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub estimated_persons: u64,
    pub calc_method: CalcMethod,
    pub status: ComplianceStatus,
    pub risk_level: RiskLevel,
    /// Estimate as a percentage of the threshold; may exceed 100.
    pub utilization: f64,
    /// Threshold minus estimate; negative once over threshold.
    pub gap: i64,
    pub cpi_trigger: bool,
    pub cpi_explanation: String,
    pub scope_explanation: String,
}
