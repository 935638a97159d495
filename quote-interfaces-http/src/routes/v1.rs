use axum::Router;

use quote_application::AppState;

use crate::handlers::{ops_handlers, pricing_handlers, quote_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/kvg/pricing/preview",
            axum::routing::post(pricing_handlers::preview_pricing),
        )
        .route(
            "/api/kvg/quotes",
            axum::routing::post(quote_handlers::create_quote)
                .get(quote_handlers::list_quotes),
        )
        .route(
            "/api/kvg/quotes/:id",
            axum::routing::get(quote_handlers::get_quote)
                .put(quote_handlers::update_quote)
                .delete(quote_handlers::delete_quote),
        )
        .route(
            "/api/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/api/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route("/api/ops/metrics", axum::routing::get(ops_handlers::metrics))
        .with_state(state)
}
