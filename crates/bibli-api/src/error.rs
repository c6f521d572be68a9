//! Error types for the API client

use thiserror::Error;

/// Errors from talking to the bibli backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, TLS, connect, timeout.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("api returned {status} for {path}: {message}")]
    Status {
        /// Response status.
        status: reqwest::StatusCode,
        /// Request path.
        path: String,
        /// Best-effort response body.
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        /// Request path.
        path: String,
        /// Underlying parse failure.
        source: serde_json::Error,
    },

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            Self::Decode { .. } | Self::InvalidConfig(_) => false,
        }
    }

    /// Whether the backend reported the resource missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }

    /// Short error code for structured logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "http_error",
            Self::Status { .. } => "api_status",
            Self::Decode { .. } => "decode_error",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            path: "/reviews".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn server_errors_and_throttling_are_retryable() {
        assert!(status_error(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(status_error(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
        assert!(status_error(StatusCode::TOO_MANY_REQUESTS).is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!status_error(StatusCode::NOT_FOUND).is_retryable());
        assert!(!status_error(StatusCode::UNPROCESSABLE_ENTITY).is_retryable());
        assert!(!ApiError::invalid_config("bad").is_retryable());
    }

    #[test]
    fn not_found_is_detectable() {
        assert!(status_error(StatusCode::NOT_FOUND).is_not_found());
        assert!(!status_error(StatusCode::FORBIDDEN).is_not_found());
    }

    #[test]
    fn codes_are_stable_snake_case() {
        assert_eq!(status_error(StatusCode::BAD_GATEWAY).code(), "api_status");
        assert_eq!(ApiError::invalid_config("x").code(), "invalid_config");
    }
}
