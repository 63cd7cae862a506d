use std::env;
use std::path::PathBuf;

use crate::persistence::JsonFileStore;

const DATA_DIR_VAR: &str = "THRESHOLD_DATA_DIR";

/// Where the persisted entry collection lives on disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Resolve the data directory from the environment, falling back to a
    /// `data` directory next to the working directory.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self { data_dir }
    }

    pub fn file_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir)
    }
}
