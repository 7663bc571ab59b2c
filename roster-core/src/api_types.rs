//! Shared API envelope types.

use serde::{Deserialize, Serialize};

/// Response envelope for endpoints that return a status plus a message
/// rather than a resource body (the delete confirmation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Success envelope carrying a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
        }
    }
}
