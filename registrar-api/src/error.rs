//! Error types for registrar-api
//!
//! Every failure leaves the server as `{"error": "<message>"}` with one of
//! three status codes: 400 (unparseable id), 404 (no such row) or 500
//! (everything else, validation failures included).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a service error onto a status code
    ///
    /// `context` names the operation ("Error inserting career") and prefixes
    /// validation messages; store errors already carry it.
    pub fn from_service(context: &str, err: registrar_common::Error) -> Self {
        use registrar_common::Error;

        match err {
            Error::NotFound(entity) => ApiError::NotFound(format!("{} not found", entity)),
            Error::Validation(message) => ApiError::Internal(format!("{}: {}", context, message)),
            other => ApiError::Internal(other.to_string()),
        }
    }

    /// Path id that is not an integer
    pub fn invalid_id() -> Self {
        ApiError::BadRequest("Invalid ID".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_message() {
        let err = ApiError::from_service(
            "Error updating term",
            registrar_common::Error::NotFound("Term".to_string()),
        );
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Term not found"));
    }

    #[test]
    fn test_validation_is_prefixed_internal() {
        let err = ApiError::from_service(
            "Error inserting career",
            registrar_common::Error::Validation("Name must not be null".to_string()),
        );
        assert_eq!(err.to_string(), "Error inserting career: Name must not be null");
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::invalid_id().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
