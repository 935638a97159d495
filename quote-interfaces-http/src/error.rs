use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use quote_domain::FieldError;

#[derive(Debug)]
pub enum HttpError {
    Unauthorized,
    BadRequest(String),
    Validation(Vec<FieldError>),
    NotFound,
    Internal(String),
}

impl From<quote_application::AppError> for HttpError {
    fn from(value: quote_application::AppError) -> Self {
        match value {
            quote_application::AppError::Unauthorized => HttpError::Unauthorized,
            quote_application::AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            quote_application::AppError::Validation(fields) => HttpError::Validation(fields),
            quote_application::AppError::NotFound => HttpError::NotFound,
            quote_application::AppError::Internal(err) => HttpError::Internal(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            HttpError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), Vec::new())
            }
            HttpError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("bad request: {}", msg),
                Vec::new(),
            ),
            HttpError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, "invalid input".to_string(), fields)
            }
            HttpError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string(), Vec::new()),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, Vec::new()),
        };
        (status, Json(ErrorBody { error: message, fields })).into_response()
    }
}
