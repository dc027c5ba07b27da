//! Status envelope used by the product and upload endpoints
use super::de::null_as_default;
use serde::{Deserialize, Serialize};

/// `{ status, message, data }` body returned by most NutriGood endpoints.
///
/// Failure bodies usually carry only `status` and `message`; success bodies
/// may omit `message`. Missing or `null` keys decode to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse<T> {
    /// Outcome indicator (e.g. "success", "fail"), server-defined
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Human-readable detail, often empty on success
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// Endpoint-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status: String::new(),
            message: String::new(),
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a response with the given status.
    pub fn with_data(status: impl Into<String>, data: T) -> Self {
        Self {
            status: status.into(),
            message: String::new(),
            data: Some(data),
        }
    }
}
