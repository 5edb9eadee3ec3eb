use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::types::Envelope;
use models::errors::ModelError;
use service::errors::ServiceError;

/// Error answered as `{ "success": false, "error": ... }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a service failure. Client errors keep their message; store and
    /// storage failures are logged and answered with `Failed to <action>`.
    pub fn from_service(action: &str, e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                Self::bad_request(msg)
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            other => {
                error!(error = %other, action, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to {action}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::<()>::failure(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage client: {0}")]
    Storage(#[from] service::storage::StorageError),
}
