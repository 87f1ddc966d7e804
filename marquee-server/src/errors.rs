use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use marquee_core::StoreError;

pub type AppResult<T> = Result<T, AppError>;

/// Request outcomes that map to client-facing error responses.
///
/// Every variant renders as `{"error": <string-or-map>}`. The inner detail
/// of `ServerError` is logged, never returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("the requested resource could not be found")]
    NotFound,

    #[error("the {0} method is not allowed for this resource")]
    MethodNotAllowed(String),

    #[error("one or more fields failed validation")]
    FailedValidation(HashMap<String, String>),

    #[error("the server encountered a problem and could not process your request")]
    ServerError(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::ServerError(detail) = &self {
            // The surrounding TraceLayer span carries method and URI.
            tracing::error!(error = %detail, "internal server error");
        }

        let body = match &self {
            AppError::FailedValidation(errors) => Json(json!({ "error": errors })),
            other => Json(json!({ "error": other.to_string() })),
        };

        (self.status(), body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RecordNotFound => AppError::NotFound,
            StoreError::Database(e) => AppError::ServerError(e.to_string()),
            StoreError::Internal(msg) => AppError::ServerError(msg),
        }
    }
}
