//! Serializable read models for the presentation collaborator: the live
//! scorecard, the recomputed history rows, and the filter dropdown values.

use serde::Serialize;

use crate::domain::{AccessScenario, DataEntry};
use crate::evaluation::{EvaluationEngine, EvaluationResult};

/// Live scorecard for the form's risk dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub estimated_persons: String,
    pub utilization: String,
    pub gap: String,
    pub risk_label: &'static str,
    pub status_label: &'static str,
    pub high_risk_warning: bool,
}

impl Scorecard {
    pub fn from_result(result: &EvaluationResult) -> Self {
        let gap = if result.gap <= 0 {
            format!("Threshold exceeded by {}", group_thousands(result.gap.unsigned_abs()))
        } else {
            format!("{} below threshold", group_thousands(result.gap as u64))
        };

        Self {
            estimated_persons: group_thousands(result.estimated_persons),
            utilization: format!("{:.1}%", result.utilization),
            gap,
            risk_label: result.risk_level.label(),
            status_label: result.status.label(),
            high_risk_warning: result.risk_level.warrants_warning(),
        }
    }
}

/// One history-table row: the stored entry plus its freshly recomputed
/// result. Results are never stored, so every listing re-scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub entry: DataEntry,
    pub result: EvaluationResult,
}

/// Build history rows in the order the store listed them.
pub fn history_rows(engine: &EvaluationEngine, entries: &[DataEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|entry| HistoryRow {
            entry: entry.clone(),
            result: engine.score_entry(entry),
        })
        .collect()
}

/// Distinct filter values present in the current collection, for the history
/// table's dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// `YYYY-MM` keys, newest first.
    pub months: Vec<String>,
    /// Scenarios sorted by label.
    pub scenarios: Vec<AccessScenario>,
}

impl FilterOptions {
    pub fn from_entries(entries: &[DataEntry]) -> Self {
        let mut months: Vec<String> = entries.iter().map(DataEntry::month_key).collect();
        months.sort();
        months.dedup();
        months.reverse();

        let mut scenarios: Vec<AccessScenario> = entries.iter().map(|entry| entry.scenario).collect();
        scenarios.sort_by_key(|scenario| scenario.label());
        scenarios.dedup();

        Self { months, scenarios }
    }
}

/// Group a count into thousands-separated form for display ("12,345").
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
