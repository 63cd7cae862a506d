use std::io;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::domain::{AccessScenario, DataEntry, IdentifierCounts};
use crate::intake::EntryDraft;
use crate::persistence::{EntryPersistence, PersistenceError};
use crate::store::EntryStore;

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn network_and_email(ip: u64, cookie: u64, email: u64) -> IdentifierCounts {
    IdentifierCounts {
        ip_address: ip,
        client_id_cookie: cookie,
        email,
        ..IdentifierCounts::default()
    }
}

pub(super) fn draft(
    as_of: NaiveDate,
    scenario: AccessScenario,
    counts: IdentifierCounts,
) -> EntryDraft {
    EntryDraft {
        as_of_date: as_of,
        scenario,
        counts,
    }
}

/// In-memory persistence double recording every flushed collection.
#[derive(Default, Clone)]
pub(super) struct MemoryPersistence {
    pub(super) stored: Arc<Mutex<Vec<DataEntry>>>,
    pub(super) fail_saves: bool,
}

impl EntryPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<DataEntry>, PersistenceError> {
        Ok(self.stored.lock().expect("persistence mutex poisoned").clone())
    }

    fn save(&self, entries: &[DataEntry]) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.stored.lock().expect("persistence mutex poisoned") = entries.to_vec();
        Ok(())
    }
}

/// Persistence double whose load always reports a malformed collection.
pub(super) struct MalformedPersistence;

impl EntryPersistence for MalformedPersistence {
    fn load(&self) -> Result<Vec<DataEntry>, PersistenceError> {
        let parse_failure = serde_json::from_str::<Vec<DataEntry>>("not json")
            .expect_err("garbage must not parse");
        Err(parse_failure.into())
    }

    fn save(&self, _entries: &[DataEntry]) -> Result<(), PersistenceError> {
        Ok(())
    }
}

pub(super) fn empty_store() -> EntryStore<MemoryPersistence> {
    EntryStore::hydrate(MemoryPersistence::default())
}
