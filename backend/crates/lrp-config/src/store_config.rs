use crate::{ConfigError, ConfigErrorResult, DEFAULT_SQLITE_FILENAME, FirestoreConfig, StoreBackend};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Relative to the config directory
    pub sqlite_path: String,
    pub firestore: FirestoreConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            sqlite_path: String::from(DEFAULT_SQLITE_FILENAME),
            firestore: FirestoreConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.backend {
            StoreBackend::Sqlite => {
                // Keep the database inside the config dir
                let path = Path::new(&self.sqlite_path);
                if self.sqlite_path.is_empty()
                    || path.is_absolute()
                    || self.sqlite_path.contains("..")
                {
                    return Err(ConfigError::store(
                        "store.sqlite_path must be relative and cannot contain '..'",
                    ));
                }
                Ok(())
            }
            StoreBackend::Firestore => self.firestore.validate(),
        }
    }
}
