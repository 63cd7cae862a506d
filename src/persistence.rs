//! Durable persistence port for the entry collection, plus the JSON-file
//! implementation used by the desktop deployment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::DataEntry;

/// Storage key the collection is persisted under. Bumping the version suffix
/// is the sole forward-compatibility mechanism; there is no migration logic
/// and an older key's data is simply left behind.
pub const STORAGE_KEY: &str = "eo14117_entries_v4";

/// Load/save boundary injected into the store so the collection can be backed
/// by any durable key-value mechanism.
pub trait EntryPersistence {
    fn load(&self) -> Result<Vec<DataEntry>, PersistenceError>;
    fn save(&self, entries: &[DataEntry]) -> Result<(), PersistenceError>;
}

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage io failure: {0}")]
    Io(#[from] io::Error),
    #[error("persisted collection is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Flat JSON list written under the fixed storage key in the data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryPersistence for JsonFileStore {
    fn load(&self) -> Result<Vec<DataEntry>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &[DataEntry]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
