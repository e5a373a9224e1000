//! OpenSearch HTTP Client
//!
//! The one long-lived connection to the search cluster. Constructed once
//! at startup from validated configuration and shared read-only by every
//! tool handler; `reqwest::Client` is safe for concurrent use, so no
//! additional locking is introduced.
//!
//! Each [`SearchBackend`] operation issues exactly one HTTP call against
//! the cluster REST API and returns the raw JSON payload. Non-success
//! status codes become backend errors carrying the response body, which
//! is where the cluster puts its human-readable failure reason.

use async_trait::async_trait;
use osmcp_domain::error::{Error, Result};
use osmcp_domain::ports::SearchBackend;
use osmcp_infrastructure::config::BackendConfig;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client for an OpenSearch cluster
#[derive(Debug)]
pub struct OpenSearchClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl OpenSearchClient {
    /// Create a new client from backend configuration
    ///
    /// Credentials are checked here as well as at config load time, so a
    /// client can never exist without them.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if !config.has_credentials() {
            return Err(Error::configuration(
                "Backend username and password are required",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_certs)
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.host.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Cluster base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request against the cluster REST API
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(method = %method, url = %url, "Backend request");

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("Request to {url} failed"), e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            Error::network_with_source(format!("Failed to read response from {url}"), e)
        })?;

        if !status.is_success() {
            return Err(Error::backend(format!("{path} returned {status}: {text}")));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::backend(format!("Invalid JSON from {path}: {e}")))
    }
}

#[async_trait]
impl SearchBackend for OpenSearchClient {
    async fn cluster_health(&self) -> Result<Value> {
        self.request(Method::GET, "_cluster/health", None).await
    }

    async fn cluster_stats(&self) -> Result<Value> {
        self.request(Method::GET, "_cluster/stats", None).await
    }

    async fn list_indices(&self) -> Result<Value> {
        self.request(Method::GET, "_cat/indices?format=json", None)
            .await
    }

    async fn get_mapping(&self, index: &str) -> Result<Value> {
        self.request(Method::GET, &format!("{index}/_mapping"), None)
            .await
    }

    async fn get_settings(&self, index: &str) -> Result<Value> {
        self.request(Method::GET, &format!("{index}/_settings"), None)
            .await
    }

    async fn search(&self, index: &str, body: Value) -> Result<Value> {
        self.request(Method::POST, &format!("{index}/_search"), Some(body))
            .await
    }
}
