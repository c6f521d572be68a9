//! Categorized application errors
//!
//! Every failure the app core can surface to a UI shell is an [`AppError`].
//! The category drives UI treatment: whether the user may retry, and which
//! toast severity the shell should show.

use bibli_api::ApiError;
use thiserror::Error;

// ToastLevel lives with the toast queue; re-exported here so error handling
// code has a single import.
pub use crate::views::notifications::ToastLevel;

/// High-level classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connectivity problems reaching the backend (often transient).
    Network,
    /// The backend answered, but with a failure.
    Api,
    /// User input or a placement that the preflight rejected.
    Validation,
    /// An action that does not fit the flow's current step.
    State,
    /// Unexpected conditions; a bug or unusable configuration.
    Internal,
}

impl ErrorCategory {
    /// Whether errors of this category may resolve on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Api)
    }

    /// Short label for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::Api => "Server",
            Self::Validation => "Input",
            Self::State => "Action",
            Self::Internal => "Internal",
        }
    }
}

/// Application-level error taxonomy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Could not reach the backend at all.
    #[error("network error: {message}")]
    Network {
        /// Human-readable description.
        message: String,
        /// Whether retrying the same call could plausibly succeed.
        retryable: bool,
    },

    /// The backend rejected or failed the request.
    #[error("backend error: {message}")]
    Api {
        /// Human-readable description.
        message: String,
        /// Whether retrying the same call could plausibly succeed.
        retryable: bool,
    },

    /// Input failed validation before any network call.
    #[error("{message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },

    /// The action is not valid at the flow's current step.
    #[error("invalid action: {message}")]
    State {
        /// Which action was rejected and why.
        message: String,
    },

    /// Unexpected condition; not user-correctable.
    #[error("internal error: {message}")]
    Internal {
        /// Diagnostic description.
        message: String,
    },
}

impl AppError {
    /// Retryable network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            retryable: true,
        }
    }

    /// Backend failure.
    pub fn api(message: impl Into<String>, retryable: bool) -> Self {
        Self::Api {
            message: message.into(),
            retryable,
        }
    }

    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Wrong-step or busy-flow rejection.
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The error's category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } => ErrorCategory::Network,
            Self::Api { .. } => ErrorCategory::Api,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::State { .. } => ErrorCategory::State,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the flow that produced this error can continue (retry or
    /// correct) rather than being abandoned.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network { retryable, .. } | Self::Api { retryable, .. } => *retryable,
            Self::Validation { .. } | Self::State { .. } => true,
            Self::Internal { .. } => false,
        }
    }

    /// Toast severity a UI shell should use for this error.
    #[must_use]
    pub fn toast_severity(&self) -> ToastLevel {
        match self {
            Self::Network { retryable, .. } | Self::Api { retryable, .. } => {
                if *retryable {
                    ToastLevel::Warning
                } else {
                    ToastLevel::Error
                }
            }
            Self::Validation { .. } | Self::State { .. } => ToastLevel::Info,
            Self::Internal { .. } => ToastLevel::Error,
        }
    }

    /// Short snake_case code for structured logging.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network_error",
            Self::Api { .. } => "api_error",
            Self::Validation { .. } => "validation_error",
            Self::State { .. } => "invalid_action",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        let retryable = err.is_retryable();
        match err {
            ApiError::Http(_) => Self::Network {
                message: err.to_string(),
                retryable,
            },
            ApiError::Status { .. } => Self::Api {
                message: err.to_string(),
                retryable,
            },
            ApiError::Decode { .. } | ApiError::InvalidConfig(_) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_failures_surface_as_warnings() {
        let err = AppError::network("connection reset");
        assert!(err.is_recoverable());
        assert_eq!(err.toast_severity(), ToastLevel::Warning);
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn terminal_backend_failures_surface_as_errors() {
        let err = AppError::api("422 unprocessable", false);
        assert!(!err.is_recoverable());
        assert_eq!(err.toast_severity(), ToastLevel::Error);
    }

    #[test]
    fn validation_and_state_errors_are_gentle() {
        assert_eq!(
            AppError::validation("pick a reaction first").toast_severity(),
            ToastLevel::Info
        );
        assert!(AppError::state("flow is busy").is_recoverable());
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::network("x").code(), "network_error");
        assert_eq!(AppError::internal("x").code(), "internal_error");
    }
}
