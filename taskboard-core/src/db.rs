/// The process-wide database handle
///
/// This module bundles the three entity tables into a single `Database`
/// value. The database is owned by the process, wrapped in an `Arc`, and
/// passed explicitly into each handler at construction; there is no global
/// singleton.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskboard_core::db::Database;
/// use taskboard_core::models::user::User;
///
/// let db = Arc::new(Database::new());
/// let alice = db.users.insert_with(|id| User {
///     id,
///     username: "alice".to_string(),
/// });
/// assert!(db.users.contains(alice.id));
/// ```

use crate::models::{comment::Comment, task::TaskItem, user::User};
use crate::store::Table;

/// All mutable state in the system, one table per entity type.
///
/// No cross-table transactions exist; each table operation is individually
/// atomic and that is all the handlers rely on.
pub struct Database {
    /// Registered users.
    pub users: Table<User>,

    /// Tasks, each referencing an owning user by ID.
    pub tasks: Table<TaskItem>,

    /// Comments, each referencing a task and an author by ID.
    pub comments: Table<Comment>,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            tasks: Table::new(),
            comments: Table::new(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
