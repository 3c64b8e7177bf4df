use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Handler-level error. `NotFound` renders as a bare 404 with no body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({"error": code, "message": message.into()}))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound | ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(msg)
            | ApiError::Service(ServiceError::Validation(msg))
            | ApiError::Service(ServiceError::Model(ModelError::Validation(msg))) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            ApiError::Service(e) => {
                error!(error = %e, "categorias request failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal server error")
            }
        }
    }
}
