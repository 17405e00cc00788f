//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{MSG_SERVER_RUNNING, STATUS_OK};

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable error code
    #[schema(example = "BAD_REQUEST")]
    pub code: String,
    /// Error message
    #[schema(example = "An error occurred")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            message: MSG_SERVER_RUNNING.to_string(),
        }
    }
}
