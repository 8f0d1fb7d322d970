//! Error types used throughout the workspace

use std::time::Duration;

use querytap_common::error::{ErrorClassification, ErrorSeverity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for QueryTap
///
/// Failures of the wrapped query client are never converted into this type;
/// the proxy hands them back to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum QueryTapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ErrorClassification for QueryTapError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Warning,
            Self::Config(_) | Self::Registry(_) => ErrorSeverity::Error,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl From<std::io::Error> for QueryTapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for QueryTap operations
pub type Result<T> = std::result::Result<T, QueryTapError>;
