use serde::{Deserialize, Serialize};

use super::config::EvaluationConfig;
use super::rules::CombinationSignals;
use crate::domain::AccessScenario;
use crate::views::group_thousands;

/// Threshold verdict for a scored entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Pass,
    Fail,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "PASS",
            ComplianceStatus::Fail => "FAIL",
        }
    }
}

/// Ordered risk grading. `Critical` is a reserved level the current grading
/// rule never produces; consumers must still treat it as above `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Critical")]
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Whether the scorecard should raise its binary high-risk warning flag.
    pub const fn warrants_warning(self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

pub(crate) struct ThresholdJudgment {
    pub status: ComplianceStatus,
    pub risk_level: RiskLevel,
    pub utilization: f64,
    pub gap: i64,
}

/// Judge the combined estimate against the bulk threshold. Utilization is
/// deliberately unclamped; values above 100 mean over-threshold and the gap
/// goes negative accordingly.
pub(crate) fn judge(signals: &CombinationSignals, config: &EvaluationConfig) -> ThresholdJudgment {
    let utilization = signals.estimated_persons as f64 / config.bulk_threshold as f64 * 100.0;
    let status = if signals.estimated_persons >= config.bulk_threshold {
        ComplianceStatus::Fail
    } else {
        ComplianceStatus::Pass
    };
    let gap = config.bulk_threshold as i64 - signals.estimated_persons as i64;

    // First match wins; Critical is never graded here.
    let risk_level = if utilization > config.high_utilization_pct {
        RiskLevel::High
    } else if utilization > config.medium_utilization_pct {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    ThresholdJudgment {
        status,
        risk_level,
        utilization,
        gap,
    }
}

pub(crate) fn combination_explanation(signals: &CombinationSignals) -> String {
    if signals.cpi_trigger {
        format!(
            "Combination identified: estimated intersection between network data ({}) and demographic data ({}).",
            group_thousands(signals.network_any),
            group_thousands(signals.other_any)
        )
    } else if signals.network_any == 0 && signals.other_any == 0 {
        "No identifier data provided for combination assessment.".to_string()
    } else if signals.network_any > 0 {
        "Combination trigger: NO. Only network identifiers detected; demographic/contact data is required to form a covered combination.".to_string()
    } else {
        "Combination trigger: NO. Only demographic/contact identifiers detected; network data is required to form a covered combination.".to_string()
    }
}

pub(crate) fn scope_explanation(scenario: AccessScenario) -> &'static str {
    if scenario.is_internal() {
        "Aggregate across all internal staff"
    } else {
        "Assessed per external application"
    }
}
