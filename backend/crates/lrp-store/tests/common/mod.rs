#![allow(dead_code)]

use lrp_core::{ActionRequest, RequisitionUpdate};
use lrp_store::SqliteRequisitionStore;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// In-memory store with migrations applied.
pub async fn create_test_store() -> SqliteRequisitionStore {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    let store = SqliteRequisitionStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");
    store
}

/// Seed a document the way the workflow side would have created it.
pub async fn seed_requisition(
    store: &SqliteRequisitionStore,
    id: &str,
    updated_at: Option<DateTime<Utc>>,
) {
    let mut data = json!({
        "title": format!("Lift plan for {}", id),
        "status": "OPEN",
        "assigneeStatus": "UNASSIGNED",
        "assigneeEmail": "original@site.com",
    })
    .as_object()
    .cloned()
    .unwrap();

    if let Some(ts) = updated_at {
        data.insert(
            "updatedAt".into(),
            Value::String(ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        );
    }

    store
        .insert(id, &data)
        .await
        .expect("Failed to seed requisition");
}

pub fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

pub fn update_for(req_id: &str, now: DateTime<Utc>) -> RequisitionUpdate {
    ActionRequest {
        req_id: Some(req_id.into()),
        pending_action: Some("ADMIN_ASSIGN".into()),
        action_by: Some("admin@site.com".into()),
        ..Default::default()
    }
    .validate()
    .unwrap()
    .reconcile(now)
}
