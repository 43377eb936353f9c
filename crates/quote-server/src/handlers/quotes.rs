//! Quote handlers

use super::ApiError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quote_core::{CreateQuoteRequest, Quote, QuoteError};

/// `author` value that asks for one random quote instead of a filter.
/// It wins over an author literally named "random".
pub const RANDOM_AUTHOR: &str = "random";

/// First `author` value wins when the parameter repeats; empty means no filter.
fn author_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "author")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let author = author_param(&params);

    if author == Some(RANDOM_AUTHOR) {
        let quote = state.quotes.random().await?;
        return Ok(Json(quote).into_response());
    }

    let quotes = state.quotes.list(author).await?;
    Ok(Json(quotes).into_response())
}

/// The body is decoded as JSON whatever its content type.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let req: CreateQuoteRequest = serde_json::from_slice(&body).map_err(QuoteError::from)?;
    if !req.is_complete() {
        return Err(QuoteError::missing_fields().into());
    }

    let quote = state.quotes.add(&req.author, &req.quote).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.quotes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Positive integer ids only
fn parse_id(raw: &str) -> quote_core::Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(QuoteError::invalid_id()),
    }
}
