//! Bearer credentials for Firestore requests.

use crate::{Result as StoreResult, StoreError};

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use tokio::sync::Mutex;

/// Token endpoint of the GCE/Cloud Run metadata server.
pub const DEFAULT_METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

const METADATA_TIMEOUT: Duration = Duration::from_secs(2);

/// Refresh this long before the metadata server says the token expires.
const EXPIRY_MARGIN_SECS: i64 = 60;

pub enum Credentials {
    /// No `Authorization` header (Firestore emulator).
    Anonymous,
    /// Fixed bearer token.
    Static(String),
    /// Access token from the metadata server, cached until near expiry.
    MetadataServer(MetadataTokenSource),
}

impl Credentials {
    pub fn metadata_server() -> Self {
        Credentials::MetadataServer(MetadataTokenSource::new(DEFAULT_METADATA_TOKEN_URL))
    }

    /// Value for the `Authorization` header, if any.
    pub async fn authorization(&self, client: &reqwest::Client) -> StoreResult<Option<String>> {
        match self {
            Credentials::Anonymous => Ok(None),
            Credentials::Static(token) => Ok(Some(format!("Bearer {}", token))),
            Credentials::MetadataServer(source) => {
                let token = source.token(client).await?;
                Ok(Some(format!("Bearer {}", token)))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::Anonymous => "anonymous",
            Credentials::Static(_) => "static-token",
            Credentials::MetadataServer(_) => "metadata-server",
        }
    }
}

#[derive(Debug, Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

struct CachedToken {
    token: String,
    refresh_at: DateTime<Utc>,
}

pub struct MetadataTokenSource {
    url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl MetadataTokenSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub async fn token(&self, client: &reqwest::Client) -> StoreResult<String> {
        let mut cached = self.cached.lock().await;

        if let Some(ref entry) = *cached
            && Utc::now() < entry.refresh_at
        {
            return Ok(entry.token.clone());
        }

        let fresh = self.fetch(client).await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn fetch(&self, client: &reqwest::Client) -> StoreResult<CachedToken> {
        debug!("Fetching access token from metadata server");

        let response = client
            .get(&self.url)
            .header("Metadata-Flavor", "Google")
            .timeout(METADATA_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                StoreError::credentials(format!("metadata token request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::credentials(format!(
                "metadata token request failed (status={}): {}",
                status, body
            )));
        }

        let parsed: MetadataTokenResponse = response.json().await.map_err(|e| {
            StoreError::credentials(format!("metadata token response unreadable: {}", e))
        })?;

        let lifetime = (parsed.expires_in - EXPIRY_MARGIN_SECS).max(0);
        Ok(CachedToken {
            token: parsed.access_token,
            refresh_at: Utc::now() + chrono::Duration::seconds(lifetime),
        })
    }
}
