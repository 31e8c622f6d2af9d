/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All route handlers return `Result<T, ApiError>` which automatically
/// converts to appropriate HTTP status codes.
///
/// Two failure classes flow in from the core and they map differently:
///
/// - Handler validation failures (`InvalidArgument`, `ReferenceNotFound`)
///   become a 400 with the handler's own message.
/// - A missing handler registration is a startup wiring defect. It becomes
///   an opaque 500 and is logged at error level; the type name never reaches
///   the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskboard_core::error::DispatchError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert dispatch errors to API errors
impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            // Handler validation failures are client errors, message and all.
            DispatchError::Handler(handler_err) => ApiError::BadRequest(handler_err.to_string()),

            // A missing registration is a configuration defect, never a
            // normal response.
            DispatchError::HandlerNotRegistered(request_type) => ApiError::InternalError(format!(
                "no handler registered for request type {}",
                request_type
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::error::HandlerError;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::InternalError("wiring".to_string());
        assert_eq!(err.to_string(), "Internal error: wiring");
    }

    #[test]
    fn test_validation_failures_map_to_bad_request() {
        let err: ApiError = DispatchError::Handler(HandlerError::ReferenceNotFound(
            "user 9999 does not exist".to_string(),
        ))
        .into();

        match err {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "reference not found: user 9999 does not exist")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_handler_maps_to_internal_error() {
        let err: ApiError = DispatchError::HandlerNotRegistered("SomeRequest").into();
        assert!(matches!(err, ApiError::InternalError(_)));
    }
}
