use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;

mod error;

pub use error::ApiError;

/// HTTP client for the administration gateway.
///
/// Every call is issued once; failures are reported to the caller and never
/// retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the decoded JSON body
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!("GET {}", path);

        let response = self.client.get(self.url(path)).send().await?;
        Self::read_json(response).await
    }

    /// POST `body` as JSON to `path` and return the decoded JSON body
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        tracing::debug!("POST {}", path);

        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::read_json(response).await
    }

    /// DELETE `path`; the body is returned when the gateway sends one
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!("DELETE {}", path);

        let response = self.client.delete(self.url(path)).send().await?;
        Self::read_json(response).await
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(text);
            return Err(ApiError::from_status(status, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Invalid JSON body from gateway: {}", text);
            ApiError::InvalidJson(e.to_string())
        })
    }
}
