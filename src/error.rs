//! Custom error types for credit-alert
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for credit-alert operations
#[derive(Error, Debug)]
pub enum AlertError {
    /// Configuration-related errors (missing or malformed settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON decoding errors for API payloads
    #[error("JSON error: {0}")]
    Json(String),

    /// A name lookup that the caller required to succeed came back empty
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An identifier was blank or otherwise unusable for an API call
    #[error("Invalid {entity_type} reference: identifier is empty")]
    InvalidReference { entity_type: &'static str },

    /// The budgeting API could not be reached (DNS, TLS, timeout, ...)
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The budgeting API answered with a non-2xx status
    #[error("Budget API returned {status} for {endpoint}: {detail}")]
    Api {
        status: u16,
        endpoint: String,
        detail: String,
    },

    /// Notification delivery errors (SMTP, file sink)
    #[error("Notification error: {0}")]
    Notification(String),
}

impl AlertError {
    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from talking to the budgeting API
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Api { .. } | Self::Json(_)
        )
    }

    /// Process exit code for this error
    ///
    /// - `1` unexpected local failure
    /// - `2` invalid configuration
    /// - `3` budget or reference could not be resolved
    /// - `4` budgeting API failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::NotFound { .. } | Self::InvalidReference { .. } => 3,
            Self::Transport { .. } | Self::Api { .. } | Self::Json(_) => 4,
            Self::Io(_) | Self::Notification(_) => 1,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AlertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AlertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for AlertError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for credit-alert operations
pub type AlertResult<T> = Result<T, AlertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlertError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = AlertError::budget_not_found("Household");
        assert_eq!(err.to_string(), "Budget not found: Household");
        assert!(err.is_not_found());
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_api_error() {
        let err = AlertError::Api {
            status: 401,
            endpoint: "budgets".into(),
            detail: "Unauthorized".into(),
        };
        assert_eq!(
            err.to_string(),
            "Budget API returned 401 for budgets: Unauthorized"
        );
        assert!(err.is_api_failure());
        assert!(!err.is_not_found());
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_invalid_reference_is_distinct_from_not_found() {
        let err = AlertError::InvalidReference {
            entity_type: "Account",
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Invalid Account reference: identifier is empty");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AlertError::Config("x".into()).exit_code(), 2);
        assert_eq!(AlertError::Notification("x".into()).exit_code(), 1);
        assert_eq!(
            AlertError::Transport {
                endpoint: "budgets".into(),
                message: "timed out".into()
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let alert_err: AlertError = io_err.into();
        assert!(matches!(alert_err, AlertError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error_is_config() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let alert_err: AlertError = yaml_err.into();
        assert!(matches!(alert_err, AlertError::Config(_)));
    }
}
