/// User model
///
/// Users are created by registration and never mutated or deleted. Username
/// uniqueness is intentionally not enforced anywhere in the core.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique ID, assigned by the store. Always positive.
    pub id: i64,

    /// Display name. Not required to be unique.
    pub username: String,
}
