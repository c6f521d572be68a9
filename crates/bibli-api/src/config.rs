//! Client configuration

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for the bibli backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token attached to every request; `None` for anonymous calls.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.bibli.app".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("bibli/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with defaults for everything else.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };
        config.normalize();
        config
    }

    /// Attach a bearer token for authenticated requests.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ApiError::invalid_config(format!("failed to read {}: {e}", path.display()))
        })?;
        let mut config: Self = toml::from_str(&raw).map_err(|e| {
            ApiError::invalid_config(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.normalize();
        Ok(config)
    }

    /// Trailing slashes on the base URL would double up when paths are
    /// appended; strip them once here.
    fn normalize(&mut self) {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::invalid_config("base_url is empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::invalid_config(format!(
                "base_url must be http(s), got {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
