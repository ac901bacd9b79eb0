//! HTTP action handler.
//!
//! Implements the ActionHandler trait against the AETHER backend REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::ActionHandler;

/// Action handler backed by the AETHER backend's HTTP API.
pub struct HttpActionHandler {
    client: Client,
    base_url: String,
}

impl HttpActionHandler {
    /// Create a handler for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client: Client::new(), base_url }
    }

    async fn post(&self, path: &str) -> anyhow::Result<()> {
        let response = self.client.post(format!("{}{}", self.base_url, path)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Backend error ({}) on {}: {}", status, path, body);
        }

        Ok(())
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let response = self.client.get(format!("{}{}", self.base_url, path)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Backend error ({}) on {}: {}", status, path, body);
        }

        Ok(response.json().await?)
    }
}

/// Node status payload from `GET /api/nodes/status`.
#[derive(Debug, Deserialize)]
struct NodeStatusResponse {
    status: String,
}

#[async_trait]
impl ActionHandler for HttpActionHandler {
    async fn rescan_nodes(&self) -> anyhow::Result<()> {
        self.post("/api/nodes/rescan").await
    }

    async fn check_node(&self, _verify: &str) -> anyhow::Result<String> {
        let response: NodeStatusResponse = self.get_json("/api/nodes/status").await?;
        Ok(response.status)
    }

    async fn get_status(&self) -> anyhow::Result<serde_json::Value> {
        self.get_json("/api/status").await
    }

    async fn stop_playback(&self) -> anyhow::Result<()> {
        self.post("/api/playback/stop").await
    }

    async fn restart_service(&self, service: &str) -> anyhow::Result<()> {
        self.post(&format!("/api/services/{}/restart", service)).await
    }
}
