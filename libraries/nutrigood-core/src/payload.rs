//! JSON codec shared by every wire type.
//!
//! The host's HTTP client hands raw bodies to [`Payload::from_json`] or
//! [`Payload::from_slice`] and sends whatever [`Payload::to_json`] returns.
//! Only the shape is checked here: field contents pass through untouched.

use crate::error::Result;
use crate::types::{
    ApiResponse, LoginRequest, LoginResponse, Product, UploadRequest, User, UserDetailsResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// A type exchanged with the NutriGood API as a JSON body.
pub trait Payload: Serialize + DeserializeOwned {
    /// Short name used in log events
    const KIND: &'static str;

    /// Decode from a JSON string.
    fn from_json(body: &str) -> Result<Self> {
        Self::from_slice(body.as_bytes())
    }

    /// Decode from raw JSON bytes.
    fn from_slice(body: &[u8]) -> Result<Self> {
        match serde_json::from_slice(body) {
            Ok(payload) => {
                debug!(kind = Self::KIND, bytes = body.len(), "Decoded payload");
                Ok(payload)
            }
            Err(e) => {
                warn!(kind = Self::KIND, error = %e, "Failed to decode payload");
                Err(e.into())
            }
        }
    }

    /// Encode as compact JSON.
    fn to_json(&self) -> Result<String> {
        let body = serde_json::to_string(self)?;
        debug!(kind = Self::KIND, bytes = body.len(), "Encoded payload");
        Ok(body)
    }

    /// Encode as indented JSON.
    fn to_json_pretty(&self) -> Result<String> {
        let body = serde_json::to_string_pretty(self)?;
        debug!(kind = Self::KIND, bytes = body.len(), "Encoded payload");
        Ok(body)
    }

    /// Encode as a JSON value tree.
    fn to_value(&self) -> Result<serde_json::Value> {
        let value = serde_json::to_value(self)?;
        debug!(kind = Self::KIND, "Encoded payload as value");
        Ok(value)
    }
}

impl Payload for LoginRequest {
    const KIND: &'static str = "login_request";
}

impl Payload for LoginResponse {
    const KIND: &'static str = "login_response";
}

impl Payload for User {
    const KIND: &'static str = "user";
}

impl Payload for UserDetailsResponse {
    const KIND: &'static str = "user_details";
}

impl Payload for Product {
    const KIND: &'static str = "product";
}

impl Payload for UploadRequest {
    const KIND: &'static str = "upload_request";
}

impl<T> Payload for ApiResponse<T>
where
    T: Serialize + DeserializeOwned,
{
    const KIND: &'static str = "api_response";
}
