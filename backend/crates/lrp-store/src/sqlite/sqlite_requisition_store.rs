//! SQLite-backed requisition documents.
//!
//! Each document is one row: the field map lives in `data` as JSON text and
//! `updated_at` mirrors `data.updatedAt` in unix milliseconds for ordering.
//! Partial overwrites go through SQLite's `json_patch`, so fields absent from
//! an update keep their stored values.

use crate::{RequisitionStore, Result as StoreResult, StoreError};

use lrp_core::{Requisition, RequisitionUpdate, fields};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use log::{debug, info};
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct SqliteRequisitionStore {
    pool: SqlitePool,
}

impl SqliteRequisitionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file and apply migrations.
    pub async fn connect(path: &Path) -> StoreResult<Self> {
        info!("Opening SQLite requisition store: {}", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(Duration::from_secs(5)),
            )
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("SQLite requisition store migrations applied");
        Ok(())
    }

    /// Create a document with the given fields.
    ///
    /// Documents are normally created by the workflow side; this exists to
    /// seed local databases and fixtures.
    pub async fn insert(&self, id: &str, data: &Map<String, Value>) -> StoreResult<()> {
        let updated_at = data
            .get(fields::UPDATED_AT)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.timestamp_millis());
        let body = serde_json::to_string(data)
            .map_err(|e| StoreError::decode(format!("Cannot encode document {}: {}", id, e)))?;

        sqlx::query("INSERT INTO requisitions (id, data, updated_at) VALUES (?, ?, ?)")
            .bind(id)
            .bind(body)
            .bind(updated_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn row_to_requisition(row: &sqlx::sqlite::SqliteRow) -> StoreResult<Requisition> {
        let id: String = row.try_get("id")?;
        let data: String = row.try_get("data")?;

        match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(map)) => Ok(Requisition::new(id, map)),
            Ok(other) => Err(StoreError::decode(format!(
                "requisitions.data for {} is not an object: {}",
                id, other
            ))),
            Err(e) => Err(StoreError::decode(format!(
                "requisitions.data for {} is not valid JSON: {}",
                id, e
            ))),
        }
    }
}

#[async_trait]
impl RequisitionStore for SqliteRequisitionStore {
    async fn apply_update(&self, update: &RequisitionUpdate) -> StoreResult<()> {
        let patch = serde_json::to_string(&update.to_fields())
            .map_err(|e| StoreError::decode(format!("Cannot encode update: {}", e)))?;

        let result = sqlx::query(
            r#"
                UPDATE requisitions
                SET data = json_patch(data, ?), updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(patch)
        .bind(update.updated_at.timestamp_millis())
        .bind(&update.req_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(&update.req_id));
        }

        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Requisition>> {
        let row = sqlx::query("SELECT id, data FROM requisitions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_requisition).transpose()
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Requisition>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query(
            r#"
                SELECT id, data
                FROM requisitions
                WHERE updated_at IS NOT NULL
                ORDER BY updated_at DESC, id DESC
                LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(Self::row_to_requisition)
            .collect::<StoreResult<Vec<_>>>()
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
