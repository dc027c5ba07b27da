//! NutriGood Core
//!
//! Wire types exchanged between the NutriGood client and its API, plus the
//! configuration describing where that API lives.
//!
//! # Overview
//!
//! - **Authentication**: [`LoginRequest`], [`LoginResponse`] and its nested [`LoginData`]
//! - **Profiles**: [`User`] and [`UserDetailsResponse`]
//! - **Products**: [`Product`] history entries and label-scan [`UploadRequest`]/[`UploadResponse`],
//!   wrapped in the shared [`ApiResponse`] envelope
//! - **Codec**: the [`Payload`] trait decodes and encodes every type as JSON
//! - **Configuration**: [`ApiConfig`] with base URL, endpoints and timeouts
//!
//! The types are passive records. They do not validate emails, ages or
//! diabetes values, and they never issue requests.
//!
//! # Example
//!
//! ```rust
//! use nutrigood_core::{LoginResponse, Payload, User};
//!
//! let body = r#"{"status":"success","message":"OK","data":{"token":"abc123"}}"#;
//! let response = LoginResponse::from_json(body)?;
//! assert_eq!(response.token(), Some("abc123"));
//!
//! let mut user = User::new("a@b.com", "pw", "Alice", 30, "no");
//! user.age = 31;
//! let json = user.to_json()?;
//! assert!(json.contains(r#""age":31"#));
//! # Ok::<(), nutrigood_core::NutriError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod payload;
pub mod types;

pub use config::ApiConfig;
pub use error::{NutriError, Result};
pub use payload::Payload;
pub use types::{
    AddProductResponse, ApiResponse, LoginData, LoginRequest, LoginResponse, Product,
    ProductCreated, ProductData, ProductDetailResponse, ProductResponse, TodayProductsResponse,
    UploadData, UploadRequest, UploadResponse, User, UserDetailsResponse,
};
