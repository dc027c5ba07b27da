/// Core error types for NutriGood
use thiserror::Error;

/// Result type alias using `NutriError`
pub type Result<T> = std::result::Result<T, NutriError>;

/// Errors raised while decoding payloads or building an API configuration.
///
/// The wire types themselves never fail: a payload either matches the JSON
/// shape or it does not, and field contents are never checked.
#[derive(Error, Debug)]
pub enum NutriError {
    /// Payload was not valid JSON or did not match the expected shape
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint could not be used
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl NutriError {
    /// Create an invalid URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

impl From<url::ParseError> for NutriError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
