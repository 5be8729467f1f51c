//! Standardized API response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ErrorCode;

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// Error body, built only from an [`ErrorCode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,

    /// The HTTP status code.
    pub status: u16,

    /// HTTP reason phrase, e.g. "Not Found".
    pub error: String,

    /// Machine-readable error code.
    pub code: String,

    /// Fixed human-readable message for the code.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            timestamp: Utc::now(),
            status: code.status(),
            error: code.reason().to_string(),
            code: code.as_str().to_string(),
            message: code.message().to_string(),
        }
    }
}
