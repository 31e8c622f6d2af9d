//! # Taskboard Core Library
//!
//! This crate contains the request dispatch and referential-integrity layer
//! of the taskboard backend: the generic entity store, the domain models,
//! the typed mediator, and one handler per request type. It knows nothing
//! about HTTP; the `taskboard-api` crate binds the transport on top.
//!
//! ## Module Organization
//!
//! - `store`: generic per-entity-type table with monotonic ID assignment
//! - `db`: the three tables bundled into one shared handle
//! - `models`: domain models (`User`, `TaskItem`, `Comment`)
//! - `dispatch`: typed request router (`Mediator`)
//! - `features`: commands, queries, and handlers per entity
//! - `error`: `HandlerError` and `DispatchError`

pub mod db;
pub mod dispatch;
pub mod error;
pub mod features;
pub mod models;
pub mod store;

/// Current version of the taskboard core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_register_all_covers_every_request_type() {
        use std::sync::Arc;

        let db = Arc::new(db::Database::new());
        let mediator = features::register_all(dispatch::MediatorBuilder::new(), &db).build();

        // Seven request types across the three features.
        assert_eq!(mediator.handler_count(), 7);
    }
}
