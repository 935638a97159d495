use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use quote_application::AppState;

#[derive(serde::Serialize)]
struct HealthBody {
    status: &'static str,
}

pub async fn health_live() -> impl IntoResponse {
    Json(HealthBody { status: "ok" })
}

pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.quote_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthBody { status: "ok" })),
        Err(err) => {
            error!("readiness check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody { status: "unavailable" }),
            )
        }
    }
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render_prometheus();
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
}
