/// Common error types for the core
///
/// Two layers of failure exist and they are deliberately kept apart:
///
/// - `HandlerError`: a validation failure local to one handler. Recoverable;
///   surfaced to the caller as a rejected request with a human-readable
///   message.
/// - `DispatchError::HandlerNotRegistered`: a startup configuration defect.
///   Never a normal response; the transport layer logs it loudly and answers
///   with an opaque server error.
///
/// No retries happen anywhere in the core; every operation is a single
/// deterministic attempt.

use thiserror::Error;

/// Validation failure raised by a feature handler before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Malformed or empty input, e.g. blank comment text.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A foreign-key field does not resolve to an existing entity.
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),
}

/// Failure returned by `Mediator::send`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No handler was registered for the request type. A configuration
    /// defect, fatal at process level.
    #[error("no handler registered for request type {0}")]
    HandlerNotRegistered(&'static str),

    /// The handler rejected the request; propagated unchanged.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

/// Convenience alias for handler return values.
pub type HandlerResult<T> = Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HandlerError::InvalidArgument("comment text cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid argument: comment text cannot be empty"
        );

        let err = HandlerError::ReferenceNotFound("user 9999 does not exist".to_string());
        assert_eq!(err.to_string(), "reference not found: user 9999 does not exist");
    }

    #[test]
    fn test_handler_error_passes_through_dispatch_error() {
        let inner = HandlerError::InvalidArgument("bad".to_string());
        let outer: DispatchError = inner.clone().into();
        assert_eq!(outer, DispatchError::Handler(inner.clone()));
        assert_eq!(outer.to_string(), inner.to_string());
    }
}
