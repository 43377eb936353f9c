//! HTTP handlers

pub mod error;
pub mod quotes;

pub use error::ApiError;

use axum::http::StatusCode;
use quote_core::QuoteError;

/// Any method a route does not register
pub async fn method_not_allowed() -> ApiError {
    QuoteError::MethodNotAllowed.into()
}

/// Paths outside the catalog
pub async fn not_found() -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        message: "404 page not found".to_string(),
    }
}
