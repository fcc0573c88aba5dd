//! Error type for HTTP handlers and its JSON rendering.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::item::{FieldError, ValidationError};
use crate::registry::RegistryError;

/// Error returned by a route handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body or path failed to parse, or the item broke a field constraint.
    #[error("{detail}")]
    InvalidInput {
        detail: String,
        errors: Vec<FieldError>,
    },
    /// Create with an id that is already stored.
    #[error("Item with this ID already exists.")]
    Conflict,
    /// No item under the requested id.
    #[error("Item not found.")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn invalid(detail: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            detail: detail.into(),
            errors: Vec::new(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => ApiError::NotFound,
            RegistryError::Conflict(_) => ApiError::Conflict,
            RegistryError::LockPoisoned(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput {
            detail: err.to_string(),
            errors: err.errors,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = match &self {
            ApiError::InvalidInput { errors, .. } if !errors.is_empty() => {
                json!({ "detail": self.to_string(), "errors": errors })
            }
            _ => json!({ "detail": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
