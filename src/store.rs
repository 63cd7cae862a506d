//! Authoritative in-memory collection of assessment entries with the
//! per (date, scenario) uniqueness rule, flushed to the injected persistence
//! port on every mutation.

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use crate::domain::{AccessScenario, DataEntry, EntryId};
use crate::intake::EntryDraft;
use crate::persistence::EntryPersistence;

/// Error raised when a save cannot be applied. Duplicate rejections leave the
/// collection and the caller's form state untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("an entry already exists for {scenario} on {as_of_date}; select it in the history list to edit")]
    DuplicateKey {
        as_of_date: NaiveDate,
        scenario: AccessScenario,
    },
    #[error("no entry with id {id} is available for editing")]
    UnknownEntry { id: EntryId },
}

/// Optional month / scenario narrowing applied by [`EntryStore::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    /// `YYYY-MM` prefix of the cutoff date.
    pub month: Option<String>,
    pub scenario: Option<AccessScenario>,
}

impl EntryFilter {
    fn matches(&self, entry: &DataEntry) -> bool {
        if let Some(month) = &self.month {
            if !entry.as_of_date.to_string().starts_with(month.as_str()) {
                return false;
            }
        }
        if let Some(scenario) = self.scenario {
            if entry.scenario != scenario {
                return false;
            }
        }
        true
    }
}

/// Entry collection plus its persistence port. The store has no notion of a
/// "current mode"; create-versus-edit lives in the caller as the optional
/// editing id threaded through [`EntryStore::save`].
pub struct EntryStore<P> {
    entries: Vec<DataEntry>,
    persistence: P,
}

impl<P: EntryPersistence> EntryStore<P> {
    /// Hydrate once at startup. An unreadable persisted collection is
    /// discarded and logged, never surfaced.
    pub fn hydrate(persistence: P) -> Self {
        let entries = match persistence.load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "discarding unreadable entry collection");
                Vec::new()
            }
        };
        Self {
            entries,
            persistence,
        }
    }

    /// Atomic replace-or-insert. Without an editing id a fresh entry is
    /// appended; with one, the pinned entry's fields are replaced in place,
    /// keeping its identity and refreshing `last_updated`. The duplicate
    /// search excludes the entry under edit so a record may keep its own
    /// date and scenario across an edit.
    pub fn save(
        &mut self,
        draft: EntryDraft,
        editing: Option<&EntryId>,
    ) -> Result<DataEntry, StoreError> {
        let duplicate = self.entries.iter().any(|entry| {
            entry.as_of_date == draft.as_of_date
                && entry.scenario == draft.scenario
                && editing != Some(&entry.id)
        });
        if duplicate {
            return Err(StoreError::DuplicateKey {
                as_of_date: draft.as_of_date,
                scenario: draft.scenario,
            });
        }

        let now = Utc::now();
        let saved = match editing {
            Some(id) => {
                let existing = self
                    .entries
                    .iter_mut()
                    .find(|entry| entry.id == *id)
                    .ok_or_else(|| StoreError::UnknownEntry { id: id.clone() })?;
                existing.as_of_date = draft.as_of_date;
                existing.scenario = draft.scenario;
                existing.counts = draft.counts;
                existing.last_updated = now;
                existing.clone()
            }
            None => {
                let entry = DataEntry {
                    id: EntryId::generate(),
                    as_of_date: draft.as_of_date,
                    scenario: draft.scenario,
                    counts: draft.counts,
                    last_updated: now,
                };
                self.entries.push(entry.clone());
                entry
            }
        };

        debug!(entry = %saved.id, scenario = %saved.scenario, "entry saved");
        self.flush();
        Ok(saved)
    }

    /// Remove an entry by id; unknown ids are ignored.
    pub fn delete(&mut self, id: &EntryId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != *id);
        if self.entries.len() != before {
            debug!(entry = %id, "entry deleted");
            self.flush();
        }
    }

    /// Look up an entry for population into edit state; does not mutate.
    pub fn select(&self, id: &EntryId) -> Option<&DataEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Entries matching the filter, most recent cutoff date first. The sort
    /// is stable, so same-date entries keep their insertion order.
    pub fn list(&self, filter: &EntryFilter) -> Vec<DataEntry> {
        let mut matched: Vec<DataEntry> = self
            .entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.as_of_date.cmp(&a.as_of_date));
        matched
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Flushes are fire-and-forget: a failed write is logged and never
    // retried, and the in-memory collection stays authoritative.
    fn flush(&self) {
        if let Err(err) = self.persistence.save(&self.entries) {
            warn!(error = %err, "failed to flush entry collection");
        }
    }
}
