//! API location and timeouts.
//!
//! `ApiConfig` only describes where the NutriGood API lives. Issuing requests
//! is up to the host application, which can embed this struct in its own
//! settings file: every field has a default.

use crate::error::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://nutrigood.akmalnurwahid.my.id";

/// Default connect/read/write timeout in milliseconds (two minutes)
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Registration endpoint, takes a `User` body
pub const REGISTER_PATH: &str = "users/register";

/// Login endpoint, takes a `LoginRequest` and answers with a `LoginResponse`
pub const LOGIN_PATH: &str = "users/login";

/// Profile endpoint, requires a bearer token and answers with a `UserDetailsResponse`
pub const USER_DETAILS_PATH: &str = "users/details";

/// Product collection: `GET` lists, `POST` adds a `Product`
pub const PRODUCTS_PATH: &str = "products";

/// Products recorded today
pub const TODAY_PRODUCTS_PATH: &str = "products/today";

/// Label-scan upload, takes an `UploadRequest` and answers with an `UploadResponse`
pub const UPLOAD_PATH: &str = "upload";

/// Configuration for reaching the NutriGood API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without trailing slash (e.g. "https://nutrigood.example.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Read timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Write timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub write_timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Create a config for `url` with default timeouts.
    ///
    /// Trailing slashes are removed. The URL must be non-empty, use http or
    /// https, and carry no query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(NutriError::invalid_url("URL cannot be empty"));
        }

        let base_url = url.trim_end_matches('/').to_string();
        parse_base_url(&base_url)?;

        debug!(base_url = %base_url, "Configured API base URL");

        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Override all three timeouts at once.
    ///
    /// Kept at millisecond precision; a non-zero timeout shorter than one
    /// millisecond is rounded up so it never turns into "no timeout".
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let ms = duration_to_ms(timeout);
        self.connect_timeout_ms = ms;
        self.read_timeout_ms = ms;
        self.write_timeout_ms = ms;
        self
    }

    /// Connection timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Read timeout as a `Duration`.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Write timeout as a `Duration`.
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Resolve `path` against the base URL.
    ///
    /// Leading slashes on `path` are ignored, so `"users/login"` and
    /// `"/users/login"` resolve to the same URL. A path on the base URL
    /// (e.g. `https://host/api`) is kept.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = parse_base_url(&self.base_url)?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// `POST users/register`
    pub fn register_url(&self) -> Result<Url> {
        self.endpoint(REGISTER_PATH)
    }

    /// `POST users/login`
    pub fn login_url(&self) -> Result<Url> {
        self.endpoint(LOGIN_PATH)
    }

    /// `GET users/details`
    pub fn user_details_url(&self) -> Result<Url> {
        self.endpoint(USER_DETAILS_PATH)
    }

    /// `GET`/`POST products`
    pub fn products_url(&self) -> Result<Url> {
        self.endpoint(PRODUCTS_PATH)
    }

    /// `GET`/`DELETE products/{id}`
    pub fn product_url(&self, id: i32) -> Result<Url> {
        self.endpoint(&format!("{}/{}", PRODUCTS_PATH, id))
    }

    /// `GET products/today`
    pub fn today_products_url(&self) -> Result<Url> {
        self.endpoint(TODAY_PRODUCTS_PATH)
    }

    /// `POST upload`
    pub fn upload_url(&self) -> Result<Url> {
        self.endpoint(UPLOAD_PATH)
    }
}

fn duration_to_ms(timeout: Duration) -> u64 {
    let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    if ms == 0 && !timeout.is_zero() {
        1
    } else {
        ms
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(NutriError::invalid_url(format!(
                "URL must start with http:// or https:// (got {other}://)"
            )))
        }
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(NutriError::invalid_url(
            "Base URL cannot contain a query string or fragment",
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ApiConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.connect_timeout(), Duration::from_secs(120));
        assert_eq!(config.read_timeout(), Duration::from_secs(120));
        assert_eq!(config.write_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn new_strips_trailing_slashes() {
        let config = ApiConfig::new("https://example.com///").unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn new_rejects_bad_urls() {
        assert!(matches!(
            ApiConfig::new(""),
            Err(NutriError::InvalidUrl(_))
        ));
        assert!(ApiConfig::new("   ").is_err());
        assert!(ApiConfig::new("example.com").is_err());
        assert!(ApiConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn new_rejects_query_and_fragment() {
        assert!(matches!(
            ApiConfig::new("https://h?x=1"),
            Err(NutriError::InvalidUrl(_))
        ));
        assert!(ApiConfig::new("https://h/api#top").is_err());
    }

    #[test]
    fn with_timeout_sets_all_three() {
        let config = ApiConfig::default().with_timeout(Duration::from_secs(5));

        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.read_timeout_ms, 5_000);
        assert_eq!(config.write_timeout_ms, 5_000);
    }

    #[test]
    fn with_timeout_keeps_sub_second_values() {
        let config = ApiConfig::default().with_timeout(Duration::from_millis(500));

        assert_eq!(config.connect_timeout(), Duration::from_millis(500));
        assert_eq!(config.read_timeout(), Duration::from_millis(500));
        assert_eq!(config.write_timeout(), Duration::from_millis(500));

        let config = ApiConfig::default().with_timeout(Duration::from_millis(1_250));
        assert_eq!(config.connect_timeout(), Duration::from_millis(1_250));
    }

    #[test]
    fn with_timeout_never_rounds_to_zero() {
        let config = ApiConfig::default().with_timeout(Duration::from_micros(300));
        assert_eq!(config.connect_timeout(), Duration::from_millis(1));

        let zero = ApiConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(zero.connect_timeout(), Duration::ZERO);
    }

    #[test]
    fn endpoints_join_base_url() {
        let config = ApiConfig::new("http://localhost:9000").unwrap();

        assert_eq!(
            config.login_url().unwrap().as_str(),
            "http://localhost:9000/users/login"
        );
        assert_eq!(
            config.register_url().unwrap().as_str(),
            "http://localhost:9000/users/register"
        );
        assert_eq!(
            config.user_details_url().unwrap().as_str(),
            "http://localhost:9000/users/details"
        );
        assert_eq!(
            config.endpoint("/users/login").unwrap(),
            config.login_url().unwrap()
        );
    }

    #[test]
    fn product_endpoints() {
        let config = ApiConfig::new("http://localhost:9000").unwrap();

        assert_eq!(
            config.products_url().unwrap().as_str(),
            "http://localhost:9000/products"
        );
        assert_eq!(
            config.product_url(42).unwrap().as_str(),
            "http://localhost:9000/products/42"
        );
        assert_eq!(
            config.today_products_url().unwrap().as_str(),
            "http://localhost:9000/products/today"
        );
        assert_eq!(
            config.upload_url().unwrap().as_str(),
            "http://localhost:9000/upload"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let config = ApiConfig::new("https://example.com/api/").unwrap();

        assert_eq!(
            config.login_url().unwrap().as_str(),
            "https://example.com/api/users/login"
        );
        assert_eq!(
            config.product_url(7).unwrap().as_str(),
            "https://example.com/api/products/7"
        );
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:9000"}"#).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.read_timeout_ms, DEFAULT_TIMEOUT_MS);

        let empty: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ApiConfig::default());
    }

    #[test]
    fn deserialized_bad_base_url_fails_on_use() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url":"nope"}"#).unwrap();
        assert!(config.login_url().is_err());

        let with_query: ApiConfig =
            serde_json::from_str(r#"{"base_url":"https://h?x=1"}"#).unwrap();
        assert!(matches!(
            with_query.login_url(),
            Err(NutriError::InvalidUrl(_))
        ));
    }
}
