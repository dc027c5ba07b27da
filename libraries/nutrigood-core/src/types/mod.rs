mod auth;
mod de;
mod product;
mod response;
mod user;

pub use auth::{LoginData, LoginRequest, LoginResponse};
pub use product::{
    AddProductResponse, Product, ProductCreated, ProductData, ProductDetailResponse,
    ProductResponse, TodayProductsResponse, UploadData, UploadRequest, UploadResponse,
};
pub use response::ApiResponse;
pub use user::{User, UserDetailsResponse};
