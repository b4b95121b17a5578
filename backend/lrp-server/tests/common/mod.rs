#![allow(dead_code)]

//! Test infrastructure for lrp-server API tests

use lrp_core::{Requisition, RequisitionUpdate};
use lrp_server::AppState;
use lrp_store::{RequisitionStore, SqliteRequisitionStore, StoreError};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a migrated in-memory SQLite store
pub async fn create_test_store() -> SqliteRequisitionStore {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    let store = SqliteRequisitionStore::new(pool);
    store.migrate().await.expect("Failed to run migrations");
    store
}

/// Create AppState for testing, returning the concrete store for seeding
pub async fn create_test_app_state() -> (AppState, SqliteRequisitionStore) {
    let store = create_test_store().await;
    let state = AppState::new(Arc::new(store.clone()));
    (state, store)
}

/// Seed a requisition created by the workflow side
pub async fn create_test_requisition(
    store: &SqliteRequisitionStore,
    id: &str,
    updated_at: Option<DateTime<Utc>>,
) {
    let mut data = json!({
        "title": format!("Lift plan for {}", id),
        "status": "OPEN",
        "assigneeStatus": "ASSIGNED",
        "assigneeEmail": "crane.op@site.com",
        "liftingPlanDriveFileId": "drive-original",
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
        .expect("Failed to create test requisition");
}

/// POST a JSON body to /action
pub async fn post_action(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/action")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// GET a path and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// GET a path and return the body as text
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

/// Store that fails every call and counts how often it was reached
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequisitionStore for FailingStore {
    async fn apply_update(&self, _update: &RequisitionUpdate) -> lrp_store::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::remote(503, "The service is currently unavailable."))
    }

    async fn get(&self, _id: &str) -> lrp_store::Result<Option<Requisition>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::remote(503, "The service is currently unavailable."))
    }

    async fn list_recent(&self, _limit: usize) -> lrp_store::Result<Vec<Requisition>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::remote(503, "The service is currently unavailable."))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
