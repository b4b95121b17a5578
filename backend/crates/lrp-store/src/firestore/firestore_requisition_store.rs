//! Requisition documents in Cloud Firestore, via the REST API.
//!
//! - update: `PATCH documents/requisitions/{id}` with an update mask and
//!   `currentDocument.exists=true`, so a missing document fails instead of
//!   being created.
//! - get: `GET documents/requisitions/{id}`.
//! - list: `POST documents:runQuery`, ordered by `updatedAt` descending.

use crate::firestore::firestore_value::{decode_fields, string_value, timestamp_value};
use crate::{COLLECTION, Credentials, RequisitionStore, Result as StoreResult, StoreError};

use lrp_core::{Requisition, RequisitionUpdate, fields};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Connection settings, already resolved from configuration.
pub struct FirestoreSettings {
    /// e.g. `https://firestore.googleapis.com` or `http://localhost:8081`
    pub base_url: String,
    pub project_id: String,
    /// Usually `(default)`
    pub database: String,
    pub credentials: Credentials,
}

pub struct FirestoreRequisitionStore {
    client: ReqwestClient,
    documents_url: String,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    #[serde(default)]
    document: Option<FirestoreDocument>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl FirestoreRequisitionStore {
    pub fn new(settings: FirestoreSettings) -> StoreResult<Self> {
        let client = ReqwestClient::builder().build()?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: ReqwestClient, settings: FirestoreSettings) -> Self {
        let documents_url = format!(
            "{}/v1/projects/{}/databases/{}/documents",
            settings.base_url.trim_end_matches('/'),
            settings.project_id,
            settings.database
        );

        Self {
            client,
            documents_url,
            credentials: settings.credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// `.../documents/requisitions/{id}` with the id percent-encoded as one
    /// path segment.
    fn document_url(&self, id: &str) -> StoreResult<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.documents_url, COLLECTION))
            .map_err(|e| StoreError::decode(format!("Invalid Firestore URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::decode("Firestore URL cannot be a base"))?
            .push(id);
        Ok(url)
    }

    async fn request(&self, method: Method, url: Url) -> StoreResult<RequestBuilder> {
        let mut req = self.client.request(method, url);
        if let Some(auth) = self.credentials.authorization(&self.client).await? {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        Ok(req)
    }

    /// Turn a non-success Firestore response into a [`StoreError`].
    async fn error_from_response(response: reqwest::Response, id: Option<&str>) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let (message, firestore_status) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.message, envelope.error.status),
            Err(_) => (body, String::new()),
        };

        if let Some(id) = id
            && (status == StatusCode::NOT_FOUND || firestore_status == "NOT_FOUND")
        {
            return StoreError::not_found(id);
        }

        StoreError::remote(status.as_u16(), message)
    }
}

#[async_trait]
impl RequisitionStore for FirestoreRequisitionStore {
    async fn apply_update(&self, update: &RequisitionUpdate) -> StoreResult<()> {
        let mut url = self.document_url(&update.req_id)?;
        {
            let mut query = url.query_pairs_mut();
            for path in update.field_paths() {
                query.append_pair("updateMask.fieldPaths", path);
            }
            query.append_pair("currentDocument.exists", "true");
        }

        let mut document_fields = Map::new();
        for (name, value) in update.string_fields() {
            document_fields.insert(name.to_string(), string_value(value));
        }
        document_fields.insert(
            fields::UPDATED_AT.to_string(),
            timestamp_value(&update.updated_at_rfc3339()),
        );

        debug!(
            "Firestore PATCH {} fields={:?}",
            update.req_id,
            update.field_paths()
        );

        let response = self
            .request(Method::PATCH, url)
            .await?
            .json(&json!({ "fields": document_fields }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response, Some(update.req_id.as_str())).await);
        }

        Ok(())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Requisition>> {
        let url = self.document_url(id)?;
        let response = self.request(Method::GET, url).await?.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, None).await);
        }

        let document: FirestoreDocument = response
            .json()
            .await
            .map_err(|e| StoreError::decode(format!("Firestore document unreadable: {}", e)))?;

        Ok(Some(to_requisition(document)))
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<Requisition>> {
        let url = Url::parse(&format!("{}:runQuery", self.documents_url))
            .map_err(|e| StoreError::decode(format!("Invalid Firestore URL: {}", e)))?;

        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": COLLECTION }],
                "orderBy": [{
                    "field": { "fieldPath": fields::UPDATED_AT },
                    "direction": "DESCENDING"
                }],
                "limit": limit
            }
        });

        let response = self
            .request(Method::POST, url)
            .await?
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response, None).await);
        }

        let items: Vec<RunQueryItem> = response
            .json()
            .await
            .map_err(|e| StoreError::decode(format!("runQuery response unreadable: {}", e)))?;

        let rows: Vec<Requisition> = items
            .into_iter()
            .filter_map(|item| item.document)
            .map(to_requisition)
            .take(limit)
            .collect();

        if rows.len() == limit {
            debug!("Listing hit the {} row cap", limit);
        }

        Ok(rows)
    }

    fn backend_name(&self) -> &'static str {
        "firestore"
    }
}

fn to_requisition(document: FirestoreDocument) -> Requisition {
    let id = document
        .name
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    if id.is_empty() {
        warn!("Firestore document with empty name: {}", document.name);
    }
    Requisition::new(id, decode_fields(&document.fields))
}
