use crate::{ConfigError, ConfigErrorResult, DEFAULT_FIRESTORE_BASE_URL, DEFAULT_FIRESTORE_DATABASE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    pub project_id: Option<String>,
    pub database: String,
    pub base_url: String,
    /// Fixed bearer token; takes precedence over the metadata server
    pub access_token: Option<String>,
    /// Fetch access tokens from the GCE/Cloud Run metadata server
    pub use_metadata_server: bool,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            database: String::from(DEFAULT_FIRESTORE_DATABASE),
            base_url: String::from(DEFAULT_FIRESTORE_BASE_URL),
            access_token: None,
            use_metadata_server: true,
        }
    }
}

impl FirestoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.project_id.as_deref() {
            Some(id) if !id.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::store(
                    "store.firestore.project_id is required for the firestore backend",
                ));
            }
        }

        if self.database.trim().is_empty() {
            return Err(ConfigError::store(
                "store.firestore.database must not be empty",
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::store(format!(
                "store.firestore.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Credential mode as shown in the startup summary.
    pub fn auth_mode(&self) -> &'static str {
        if self.access_token.is_some() {
            "static-token"
        } else if self.use_metadata_server {
            "metadata-server"
        } else {
            "anonymous"
        }
    }
}
