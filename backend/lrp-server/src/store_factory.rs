use crate::error::{Result as ServerErrorResult, ServerError};

use lrp_config::{Config, ConfigError, FirestoreConfig, StoreBackend};
use lrp_store::{
    Credentials, FirestoreRequisitionStore, FirestoreSettings, RequisitionStore,
    SqliteRequisitionStore,
};

use std::sync::Arc;

use log::info;

/// Open the configured store backend. SQLite migrations run here.
pub async fn open_store(config: &Config) -> ServerErrorResult<Arc<dyn RequisitionStore>> {
    match config.store.backend {
        StoreBackend::Sqlite => {
            let path = config.sqlite_path()?;
            let store = SqliteRequisitionStore::connect(&path).await?;
            info!("SQLite store ready (migrations applied)");
            Ok(Arc::new(store))
        }
        StoreBackend::Firestore => {
            let settings = firestore_settings(&config.store.firestore)?;
            info!(
                "Using Firestore store: project={}, database={}, auth={}",
                settings.project_id,
                settings.database,
                settings.credentials.kind()
            );

            let store = FirestoreRequisitionStore::new(settings)?;
            Ok(Arc::new(store))
        }
    }
}

/// Resolve Firestore connection settings from validated configuration.
#[track_caller]
pub fn firestore_settings(config: &FirestoreConfig) -> ServerErrorResult<FirestoreSettings> {
    let project_id = config.project_id.clone().ok_or_else(|| {
        ServerError::from(ConfigError::store(
            "store.firestore.project_id is required for the firestore backend",
        ))
    })?;

    let credentials = match (&config.access_token, config.use_metadata_server) {
        (Some(token), _) => Credentials::Static(token.clone()),
        (None, true) => Credentials::metadata_server(),
        (None, false) => Credentials::Anonymous,
    };

    Ok(FirestoreSettings {
        base_url: config.base_url.clone(),
        project_id,
        database: config.database.clone(),
        credentials,
    })
}
