use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use symcheck_catalog::CatalogError;

/// Errors a handler can return. Every variant renders as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown condition name in the path.
    NotFound(String),
    /// Request body could not be read as a prediction request.
    BadRequest(String),
    /// Catalog inconsistency; details are logged, not returned.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "catalog error while serving request");
                "internal server error".to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownCondition(name) => {
                ApiError::NotFound(format!("condition not found: {name}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
