//! Bulk-data threshold evaluation and record keeping.
//!
//! Evaluates whether an organization's exposure to US persons' data, per
//! reporting date and access scenario, crosses the fixed EO 14117 "bulk"
//! threshold of 100,000 affected individuals. The crate supplies the pure
//! evaluation engine, the entry store enforcing per (date, scenario)
//! uniqueness, and the read models a presentation layer renders; it carries
//! no HTTP, CLI, or rendering surface of its own.

pub mod config;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod persistence;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use config::StorageConfig;
pub use domain::{AccessScenario, DataEntry, EntryId, IdentifierCounts};
pub use evaluation::{
    CalcMethod, ComplianceStatus, EvaluationConfig, EvaluationEngine, EvaluationResult, RiskLevel,
    BULK_THRESHOLD,
};
pub use intake::{sanitize_counter, CounterField, EntryDraft, FieldUpdate};
pub use persistence::{EntryPersistence, JsonFileStore, PersistenceError, STORAGE_KEY};
pub use store::{EntryFilter, EntryStore, StoreError};
pub use views::{group_thousands, history_rows, FilterOptions, HistoryRow, Scorecard};
