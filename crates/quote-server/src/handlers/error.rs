//! Error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quote_core::QuoteError;

/// Plain-text error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        let status = match e {
            QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            QuoteError::NotFound(_) => StatusCode::NOT_FOUND,
            QuoteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed ({}): {}", self.status, self.message);
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(QuoteError::invalid_id()).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(QuoteError::store_empty()).status,
            StatusCode::NOT_FOUND
        );
        let err = ApiError::from(QuoteError::MethodNotAllowed);
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message, "Method not allowed");
    }
}
