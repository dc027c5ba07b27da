//! Product history and label-scan payloads
//!
//! Products are the sugar-intake entries a user records, either by hand or
//! from a scanned nutrition label. The server stores them per user; these
//! types only describe the bodies.

use super::de::{lenient_f64, lenient_string_map, null_as_default};
use super::response::ApiResponse;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A recorded product.
///
/// `id`, `user_id` and `created_at` are assigned by the server and left
/// unset when a client submits a new entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Server row id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Owner, derived by the server from the bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Product name
    #[serde(deserialize_with = "null_as_default")]
    pub nama_product: String,

    /// Sugar content in grams
    #[serde(deserialize_with = "lenient_f64")]
    pub value_product: f64,

    /// Category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kategori: Option<String>,

    /// Consumption recommendation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rekomendasi: Option<String>,

    /// Creation time as "YYYY-MM-DD HH:MM:SS"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Create a new entry with a name and sugar content.
    pub fn new(nama_product: impl Into<String>, value_product: f64) -> Self {
        Self {
            nama_product: nama_product.into(),
            value_product,
            ..Self::default()
        }
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

/// Wrapper around the product list of `GET products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

/// Id assigned by `POST products`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: i32,
}

/// Response of `GET products`, newest first
pub type ProductResponse = ApiResponse<ProductData>;

/// Response of `GET products/{id}`
pub type ProductDetailResponse = ApiResponse<Product>;

/// Response of `GET products/today`
pub type TodayProductsResponse = ApiResponse<Vec<Product>>;

/// Response of `POST products`
pub type AddProductResponse = ApiResponse<ProductCreated>;

impl ProductResponse {
    /// Products in the response, empty when `data` is missing.
    pub fn products(&self) -> &[Product] {
        self.data
            .as_ref()
            .map(|data| data.products.as_slice())
            .unwrap_or_default()
    }
}

/// Photo of a nutrition label sent for scanning
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Data URL ("data:image/jpeg;base64,...")
    pub base64_image: String,

    /// Client-side name for the photo
    pub file_name: String,
}

impl UploadRequest {
    pub fn new(base64_image: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            base64_image: base64_image.into(),
            file_name: file_name.into(),
        }
    }
}

impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("base64_image", &format_args!("<{} bytes>", self.base64_image.len()))
            .field("file_name", &self.file_name)
            .finish()
    }
}

/// Scan result nested in an [`UploadResponse`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadData {
    /// Scanner message, [`UploadData::NOT_FOUND`] when no label was read
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// Nutrition facts keyed by label (e.g. "Calories" -> "120")
    #[serde(
        deserialize_with = "lenient_string_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutrition_info: Option<BTreeMap<String, String>>,
}

impl UploadData {
    /// Message sent when the scanner found no nutrition label
    pub const NOT_FOUND: &'static str = "Tidak ditemukan";

    /// Whether the scanner reported that no label was found.
    pub fn is_not_found(&self) -> bool {
        self.message == Self::NOT_FOUND
    }
}

/// Response of the label-scan upload
pub type UploadResponse = ApiResponse<UploadData>;
