/// Feature modules
///
/// One module per entity, each bundling its commands, queries, handlers, and
/// a `register` function that wires the handlers into the dispatcher at
/// startup. `register_all` binds every feature; it runs once, before any
/// request is served.

pub mod comments;
pub mod tasks;
pub mod users;

use crate::db::Database;
use crate::dispatch::MediatorBuilder;
use std::sync::Arc;

/// Registers every feature's handlers against the shared database handle.
pub fn register_all(builder: MediatorBuilder, db: &Arc<Database>) -> MediatorBuilder {
    let builder = users::register(builder, db);
    let builder = tasks::register(builder, db);
    comments::register(builder, db)
}
