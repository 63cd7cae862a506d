use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for stored assessment entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Access contexts under which US-person identifiers are reachable: the
/// combined internal-staff pool plus one variant per integrated external
/// application. Serialized labels match the persisted collection format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessScenario {
    #[serde(rename = "Internal Staff (Combined)")]
    InternalStaffCombined,
    #[serde(rename = "External App – Trustoo Email Popups")]
    TrustooEmailPopups,
    #[serde(rename = "External App – 17TRACK")]
    SeventeenTrack,
    #[serde(rename = "External App – QuickCEP")]
    QuickCep,
}

impl AccessScenario {
    /// Every scenario in form-rendering order.
    pub const ALL: [AccessScenario; 4] = [
        AccessScenario::InternalStaffCombined,
        AccessScenario::TrustooEmailPopups,
        AccessScenario::SeventeenTrack,
        AccessScenario::QuickCep,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AccessScenario::InternalStaffCombined => "Internal Staff (Combined)",
            AccessScenario::TrustooEmailPopups => "External App – Trustoo Email Popups",
            AccessScenario::SeventeenTrack => "External App – 17TRACK",
            AccessScenario::QuickCep => "External App – QuickCEP",
        }
    }

    pub const fn is_internal(self) -> bool {
        matches!(self, AccessScenario::InternalStaffCombined)
    }
}

impl fmt::Display for AccessScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-identifier reach counters, split into the two categories the
/// combination rule aggregates over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierCounts {
    // Network identifiers
    pub ip_address: u64,
    pub client_id_cookie: u64,
    // Demographic/contact identifiers
    pub email: u64,
    pub phone_number: u64,
    pub name: u64,
    pub address: u64,
    pub zip_code: u64,
    pub date_of_birth: u64,
}

impl IdentifierCounts {
    /// Largest single-identifier reach within the network category.
    pub fn network_any(&self) -> u64 {
        self.ip_address.max(self.client_id_cookie)
    }

    /// Largest single-identifier reach within the demographic/contact category.
    pub fn other_any(&self) -> u64 {
        self.email
            .max(self.phone_number)
            .max(self.name)
            .max(self.address)
            .max(self.zip_code)
            .max(self.date_of_birth)
    }
}

/// A single point-in-time assessment input, unique per cutoff date and
/// scenario. Counter fields are flattened so the persisted record keeps the
/// flat shape of the stored collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEntry {
    pub id: EntryId,
    pub as_of_date: NaiveDate,
    pub scenario: AccessScenario,
    #[serde(flatten)]
    pub counts: IdentifierCounts,
    pub last_updated: DateTime<Utc>,
}

impl DataEntry {
    /// `YYYY-MM` prefix of the cutoff date, used by the history month filter.
    pub fn month_key(&self) -> String {
        self.as_of_date.format("%Y-%m").to_string()
    }
}
