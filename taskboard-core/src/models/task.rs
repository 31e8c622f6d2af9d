/// Task model
///
/// A task belongs to exactly one user via the `user_id` foreign key. The
/// scalar key is authoritative; the owning `User` is looked up on demand and
/// never embedded in the persisted row.

use serde::{Deserialize, Serialize};

/// A tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    /// Unique ID, assigned by the store.
    pub id: i64,

    /// Human-readable title.
    pub title: String,

    /// Completion flag. Always false at creation.
    pub is_completed: bool,

    /// Owning user. Must resolve to an existing `User` at creation time;
    /// the store itself does not enforce this, the handler does.
    pub user_id: i64,
}
