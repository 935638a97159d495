use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use quote_application::queries::pricing_queries;
use quote_application::AppState;
use quote_domain::{PricingInput, PricingResult};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn preview_pricing(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<PricingInput>,
) -> Result<Json<PricingResult>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let result = pricing_queries::preview_pricing(&state, input).await?;
    Ok(Json(result))
}
