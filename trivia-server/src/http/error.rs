//! API error types with IntoResponse
//!
//! Every failure renders the `{success: false, error, message}` envelope. The
//! cause is logged; only the static message reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with explicit HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request or unknown category reference (400)
    BadRequest { reason: String },

    /// Empty result set or unknown route (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Missing body field or failed write (422)
    Unprocessable { reason: String },

    /// Store failure on a read path (500)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Static message carried in the envelope
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Store(_) => "internal server error",
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// A failed write. The store error is kept as the reason.
    pub fn unprocessable(cause: impl std::fmt::Display) -> Self {
        Self::Unprocessable {
            reason: cause.to_string(),
        }
    }

    pub fn bad_request(cause: impl std::fmt::Display) -> Self {
        Self::BadRequest {
            reason: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "bad request"),
            Self::NotFound { resource, id } => tracing::debug!(resource, %id, "not found"),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::warn!(%reason, "unprocessable request"),
            Self::Store(e) => tracing::error!("Store error: {}", e),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
