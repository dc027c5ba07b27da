//! Authentication payloads
//!
//! Bodies exchanged with the `users/login` endpoint. Nothing here talks to
//! the network; the HTTP client that sends [`LoginRequest`] and decodes
//! [`LoginResponse`] lives in the host application.

use super::de::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials sent to the login endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login identifier
    pub email: String,

    /// Cleartext password
    pub password: String,
}

impl LoginRequest {
    /// Create a login request from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a login attempt.
///
/// Every field starts empty and is filled by name from the response body.
/// Keys missing from the body, or sent as `null`, keep their default, so a
/// failure body without `data` decodes cleanly with `data == None`.
///
/// `data` is only meaningful when `status` reports success. That correlation
/// is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// Outcome indicator (e.g. "success", "fail"), server-defined
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Human-readable detail
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// Token payload, present after a successful login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
}

impl LoginResponse {
    /// Token carried by this response, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.token.as_str())
    }
}

/// Token payload nested in a [`LoginResponse`]
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginData {
    /// Opaque bearer credential
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
}

impl LoginData {
    /// Create a payload wrapping `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for an `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for LoginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginData")
            .field("token", &"<redacted>")
            .finish()
    }
}
