use tracing::error;
use uuid::Uuid;

use quote_domain::{Quote, QuoteListQuery};

use crate::AppError;
use crate::AppState;

pub async fn get_quote(state: &AppState, id: Uuid) -> Result<Quote, AppError> {
    state
        .quote_repo
        .fetch(id)
        .await
        .map_err(|err| {
            error!("failed to fetch quote: {}", err);
            AppError::Internal(err)
        })?
        .ok_or(AppError::NotFound)
}

pub async fn list_quotes(state: &AppState, query: QuoteListQuery) -> Result<Vec<Quote>, AppError> {
    state
        .quote_repo
        .fetch_all(query.customer.as_deref())
        .await
        .map_err(|err| {
            error!("failed to list quotes: {}", err);
            AppError::Internal(err)
        })
}
