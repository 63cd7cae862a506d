//! Form boundary: the draft record the entry form edits, plus the sanitizers
//! that keep invalid numeric input away from the evaluation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AccessScenario, DataEntry, IdentifierCounts};

/// Form-shaped candidate record: everything the store needs except identity
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub as_of_date: NaiveDate,
    pub scenario: AccessScenario,
    pub counts: IdentifierCounts,
}

impl EntryDraft {
    /// Blank form state for a new assessment dated `as_of`.
    pub fn initial(as_of: NaiveDate) -> Self {
        Self {
            as_of_date: as_of,
            scenario: AccessScenario::InternalStaffCombined,
            counts: IdentifierCounts::default(),
        }
    }

    /// Populate the form from a stored entry selected for editing.
    pub fn from_entry(entry: &DataEntry) -> Self {
        Self {
            as_of_date: entry.as_of_date,
            scenario: entry.scenario,
            counts: entry.counts,
        }
    }

    /// Apply a single validated field update.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::AsOfDate(date) => self.as_of_date = date,
            FieldUpdate::Scenario(scenario) => self.scenario = scenario,
            FieldUpdate::Counter(field, value) => *self.counter_mut(field) = value,
        }
    }

    fn counter_mut(&mut self, field: CounterField) -> &mut u64 {
        match field {
            CounterField::IpAddress => &mut self.counts.ip_address,
            CounterField::ClientIdCookie => &mut self.counts.client_id_cookie,
            CounterField::Email => &mut self.counts.email,
            CounterField::PhoneNumber => &mut self.counts.phone_number,
            CounterField::Name => &mut self.counts.name,
            CounterField::Address => &mut self.counts.address,
            CounterField::ZipCode => &mut self.counts.zip_code,
            CounterField::DateOfBirth => &mut self.counts.date_of_birth,
        }
    }
}

/// The eight counter fields a form can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterField {
    IpAddress,
    ClientIdCookie,
    Email,
    PhoneNumber,
    Name,
    Address,
    ZipCode,
    DateOfBirth,
}

/// Tagged union of known form fields and their value types, so dynamic form
/// updates never reach the engine untyped.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    AsOfDate(NaiveDate),
    Scenario(AccessScenario),
    Counter(CounterField, u64),
}

/// Strip non-digit characters and parse; anything unusable coerces to zero.
pub fn sanitize_counter(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
