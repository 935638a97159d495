use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use quote_application::commands::quote_commands;
use quote_application::queries::quote_queries;
use quote_application::AppState;
use quote_domain::{Quote, QuoteListQuery, QuotePayload};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn create_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<QuotePayload>,
) -> Result<(StatusCode, Json<Quote>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let quote = quote_commands::create_quote(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn list_quotes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<QuoteListQuery>,
) -> Result<Json<Vec<Quote>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let quotes = quote_queries::list_quotes(&state, query).await?;
    Ok(Json(quotes))
}

pub async fn get_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Quote>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let quote = quote_queries::get_quote(&state, id).await?;
    Ok(Json(quote))
}

pub async fn update_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<QuotePayload>,
) -> Result<Json<Quote>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let quote = quote_commands::update_quote(&state, id, payload).await?;
    Ok(Json(quote))
}

pub async fn delete_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    quote_commands::delete_quote(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
