use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::{Value, json};

/// Body of `POST /action`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAction {
    pub req_id: String,
    pub pending_action: String,
    pub action_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifting_plan_drive_file_id: Option<String>,
}

/// HTTP client for the lrp-server API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Body text of a 2xx response; anything else is a rejection
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&SubmitAction>,
    ) -> CliClientResult<String> {
        let url = self.url(path);
        let mut req = self.client.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ClientError::unreachable(&url, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::unreachable(&url, e))?;

        if !status.is_success() {
            return Err(ClientError::rejected(status.as_u16(), &text));
        }

        Ok(text)
    }

    /// Submit a workflow action for one requisition
    pub async fn submit_action(&self, action: &SubmitAction) -> CliClientResult<Value> {
        let text = self.send(Method::POST, "/action", Some(action)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Most recently updated requisitions
    pub async fn list_requisitions(&self) -> CliClientResult<Value> {
        let text = self.send(Method::GET, "/requisitions", None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Liveness check. The server answers with plain text.
    pub async fn health(&self) -> CliClientResult<Value> {
        let text = self.send(Method::GET, "/", None).await?;
        Ok(json!({ "ok": true, "status": text }))
    }
}

