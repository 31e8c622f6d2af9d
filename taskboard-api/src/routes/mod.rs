/// API route handlers
///
/// Each submodule covers one resource. Route handlers never touch the store
/// directly; they build a typed request and send it through the mediator.

pub mod comments;
pub mod health;
pub mod tasks;
pub mod users;
