use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use quote_domain::{Quote, QuotePayload};

use crate::queries::pricing_queries::price_input;
use crate::AppError;
use crate::AppState;

fn checked_payload(payload: QuotePayload) -> Result<QuotePayload, AppError> {
    let payload = payload.normalized();
    if payload.customer_name.is_empty() {
        return Err(AppError::BadRequest(
            "customer_name must not be empty".to_string(),
        ));
    }
    Ok(payload)
}

pub async fn create_quote(state: &AppState, payload: QuotePayload) -> Result<Quote, AppError> {
    let payload = checked_payload(payload)?;
    let pricing = price_input(state, &payload.input)?;
    let quote = Quote::from_payload(Uuid::new_v4(), payload, pricing, Utc::now());

    state.quote_repo.insert(&quote).await.map_err(|err| {
        error!("failed to insert quote: {}", err);
        AppError::Internal(err)
    })?;
    state.metrics.record_quote_created();
    info!(quote_id = %quote.id, "quote created");
    Ok(quote)
}

pub async fn update_quote(
    state: &AppState,
    id: Uuid,
    payload: QuotePayload,
) -> Result<Quote, AppError> {
    let payload = checked_payload(payload)?;
    let pricing = price_input(state, &payload.input)?;

    let existing = state
        .quote_repo
        .fetch(id)
        .await
        .map_err(AppError::Internal)?
        .ok_or(AppError::NotFound)?;

    let mut quote = Quote::from_payload(id, payload, pricing, Utc::now());
    quote.created_at = existing.created_at;

    let replaced = state.quote_repo.replace(&quote).await.map_err(|err| {
        error!("failed to replace quote: {}", err);
        AppError::Internal(err)
    })?;
    if !replaced {
        return Err(AppError::NotFound);
    }
    state.metrics.record_quote_updated();
    Ok(quote)
}

pub async fn delete_quote(state: &AppState, id: Uuid) -> Result<(), AppError> {
    let removed = state.quote_repo.remove(id).await.map_err(|err| {
        error!("failed to delete quote: {}", err);
        AppError::Internal(err)
    })?;
    if !removed {
        return Err(AppError::NotFound);
    }
    state.metrics.record_quote_deleted();
    info!(quote_id = %id, "quote deleted");
    Ok(())
}
