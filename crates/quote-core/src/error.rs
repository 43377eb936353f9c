//! Error types for the quote catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Every failure is terminal for the request that caused it and leaves the
/// store untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Missing field, malformed id or undecodable body
    #[error("{0}")]
    Validation(String),

    /// Unknown id, or a random pick from an empty store
    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl QuoteError {
    pub fn missing_fields() -> Self {
        QuoteError::Validation("Missing author or quote field".to_string())
    }

    pub fn invalid_id() -> Self {
        QuoteError::Validation("Invalid ID".to_string())
    }

    pub fn quote_not_found() -> Self {
        QuoteError::NotFound("Quote not found".to_string())
    }

    pub fn store_empty() -> Self {
        QuoteError::NotFound("No quotes found".to_string())
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::Validation(format!("Bad request: {}", e))
    }
}
