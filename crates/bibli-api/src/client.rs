//! HTTP plumbing shared by all endpoint groups

use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Async client for the bibli backend REST API.
///
/// Cheap to clone; clones share one connection pool. Endpoint methods live
/// in the resource modules (`books`, `reviews`, `collections`, `users`,
/// `activity`) as further `impl ApiClient` blocks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Backend reachability probe (`GET /health`).
    pub async fn health(&self) -> Result<(), ApiError> {
        self.execute_unit("/health", self.request(Method::GET, "/health"))
            .await
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.config.bearer_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and decode the JSON response body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let response = Self::check_status(path, response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Send a request where only success matters (empty response bodies).
    pub(crate) async fn execute_unit(
        &self,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<(), ApiError> {
        let response = builder.send().await?;
        Self::check_status(path, response).await?;
        Ok(())
    }

    async fn check_status(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, path, "api request succeeded");
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(%status, path, "api request failed");
        Err(ApiError::Status {
            status,
            path: path.to_string(),
            message,
        })
    }
}
