/// Typed request dispatch
///
/// This module is the router at the heart of the system: a registry mapping
/// a request's type identity to exactly one handler. Registration happens
/// once at startup through `MediatorBuilder`; the built `Mediator` is
/// read-only for the rest of the process. Dispatch itself performs no
/// business validation, only lookup, invocation, and error propagation.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use taskboard_core::dispatch::{MediatorBuilder, Request, RequestHandler};
/// use taskboard_core::error::HandlerResult;
///
/// struct Ping;
/// impl Request for Ping {
///     type Response = String;
/// }
///
/// struct PingHandler;
///
/// #[async_trait]
/// impl RequestHandler<Ping> for PingHandler {
///     async fn handle(&self, _request: Ping) -> HandlerResult<String> {
///         Ok("pong".to_string())
///     }
/// }
///
/// # async fn example() {
/// let mediator = MediatorBuilder::new()
///     .register::<Ping, _>(PingHandler)
///     .build();
/// assert_eq!(mediator.send(Ping).await.unwrap(), "pong");
/// # }
/// ```

use crate::error::{DispatchError, HandlerResult};
use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// A dispatchable request. The type itself is the routing key; the
/// associated type names what a successful dispatch returns.
pub trait Request: Send + 'static {
    /// Result type produced by the handler for this request.
    type Response: Send + 'static;
}

/// A handler for exactly one request type.
///
/// Handlers are stateless apart from the store handle they were constructed
/// with, and may be invoked concurrently.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    /// Validates the request against current store state, applies its
    /// mutation (if any), and returns the result. Validation always precedes
    /// mutation; a rejected request writes nothing.
    async fn handle(&self, request: R) -> HandlerResult<R::Response>;
}

/// Collects handler registrations before the process starts serving.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl MediatorBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for request type `R`.
    ///
    /// Each request type takes exactly one handler. Registering a second
    /// handler for the same type replaces the first and logs a warning,
    /// since that only happens through a wiring mistake at startup.
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        if self
            .handlers
            .insert(TypeId::of::<R>(), Box::new(handler))
            .is_some()
        {
            tracing::warn!(
                request_type = std::any::type_name::<R>(),
                "replaced an earlier handler registration"
            );
        }
        self
    }

    /// Freezes the registrations into an immutable `Mediator`.
    pub fn build(self) -> Mediator {
        tracing::debug!(handlers = self.handlers.len(), "mediator built");
        Mediator {
            handlers: self.handlers,
        }
    }
}

/// The immutable request router. Cheap to share behind an `Arc`; `send` may
/// be called concurrently from any number of tasks.
pub struct Mediator {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Mediator {
    /// Routes the request to its registered handler.
    ///
    /// Returns the handler's result, or its validation failure unchanged.
    /// Fails with `DispatchError::HandlerNotRegistered` when no handler was
    /// registered for `R` — a configuration defect the caller should treat
    /// as fatal, not as a recoverable condition.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        let request_type = std::any::type_name::<R>();

        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .ok_or(DispatchError::HandlerNotRegistered(request_type))?;

        Ok(handler.handle(request).await?)
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;

    struct Echo(String);
    impl Request for Echo {
        type Response = String;
    }

    struct EchoHandler;

    #[async_trait]
    impl RequestHandler<Echo> for EchoHandler {
        async fn handle(&self, request: Echo) -> HandlerResult<String> {
            Ok(request.0)
        }
    }

    struct AlwaysRejected;
    impl Request for AlwaysRejected {
        type Response = ();
    }

    struct RejectingHandler;

    #[async_trait]
    impl RequestHandler<AlwaysRejected> for RejectingHandler {
        async fn handle(&self, _request: AlwaysRejected) -> HandlerResult<()> {
            Err(HandlerError::InvalidArgument("always rejected".to_string()))
        }
    }

    #[tokio::test]
    async fn test_send_routes_to_registered_handler() {
        let mediator = MediatorBuilder::new().register::<Echo, _>(EchoHandler).build();

        let reply = mediator.send(Echo("hello".to_string())).await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_send_fails_for_unregistered_request_type() {
        let mediator = MediatorBuilder::new().register::<Echo, _>(EchoHandler).build();

        let err = mediator.send(AlwaysRejected).await.unwrap_err();
        match err {
            DispatchError::HandlerNotRegistered(name) => {
                assert!(name.contains("AlwaysRejected"));
            }
            other => panic!("expected HandlerNotRegistered, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handler_failure_propagates_unchanged() {
        let mediator = MediatorBuilder::new()
            .register::<AlwaysRejected, _>(RejectingHandler)
            .build();

        let err = mediator.send(AlwaysRejected).await.unwrap_err();
        assert_eq!(
            err,
            DispatchError::Handler(HandlerError::InvalidArgument(
                "always rejected".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_last_handler() {
        struct Shout;
        impl Request for Shout {
            type Response = String;
        }

        struct Quiet;
        #[async_trait]
        impl RequestHandler<Shout> for Quiet {
            async fn handle(&self, _request: Shout) -> HandlerResult<String> {
                Ok("quiet".to_string())
            }
        }

        struct Loud;
        #[async_trait]
        impl RequestHandler<Shout> for Loud {
            async fn handle(&self, _request: Shout) -> HandlerResult<String> {
                Ok("LOUD".to_string())
            }
        }

        let mediator = MediatorBuilder::new()
            .register::<Shout, _>(Quiet)
            .register::<Shout, _>(Loud)
            .build();

        assert_eq!(mediator.handler_count(), 1);
        assert_eq!(mediator.send(Shout).await.unwrap(), "LOUD");
    }
}
