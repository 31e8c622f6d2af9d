/// Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a task, written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique ID, assigned by the store.
    pub id: i64,

    /// Task this comment is attached to. Must resolve at creation time.
    pub task_item_id: i64,

    /// Author. Must resolve at creation time.
    pub user_id: i64,

    /// Comment body. Non-empty after trimming whitespace.
    pub text: String,

    /// Set once at creation and never changed. Listing sorts on this, not on
    /// insertion order.
    pub created_at: DateTime<Utc>,
}
