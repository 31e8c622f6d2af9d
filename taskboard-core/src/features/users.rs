/// Users feature
///
/// Registration and listing. No validation applies here: usernames are not
/// required to be unique, and listing is a straight read in insertion order.

use crate::db::Database;
use crate::dispatch::{MediatorBuilder, Request, RequestHandler};
use crate::error::HandlerResult;
use crate::models::user::User;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Command: register a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    /// Display name for the new user.
    pub username: String,
}

impl Request for RegisterUser {
    type Response = User;
}

/// Query: list all users, insertion order.
#[derive(Debug, Clone, Default)]
pub struct GetAllUsers;

impl Request for GetAllUsers {
    type Response = Vec<User>;
}

/// Handles `RegisterUser`.
pub struct RegisterUserHandler {
    db: Arc<Database>,
}

impl RegisterUserHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<RegisterUser> for RegisterUserHandler {
    async fn handle(&self, request: RegisterUser) -> HandlerResult<User> {
        let user = self.db.users.insert_with(|id| User {
            id,
            username: request.username,
        });
        tracing::debug!(user_id = user.id, "user registered");
        Ok(user)
    }
}

/// Handles `GetAllUsers`.
pub struct GetAllUsersHandler {
    db: Arc<Database>,
}

impl GetAllUsersHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<GetAllUsers> for GetAllUsersHandler {
    async fn handle(&self, _request: GetAllUsers) -> HandlerResult<Vec<User>> {
        Ok(self.db.users.list())
    }
}

/// Wires the users feature into the dispatcher.
pub fn register(builder: MediatorBuilder, db: &Arc<Database>) -> MediatorBuilder {
    builder
        .register::<RegisterUser, _>(RegisterUserHandler::new(db.clone()))
        .register::<GetAllUsers, _>(GetAllUsersHandler::new(db.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Mediator;

    fn mediator() -> (Mediator, Arc<Database>) {
        let db = Arc::new(Database::new());
        let mediator = register(MediatorBuilder::new(), &db).build();
        (mediator, db)
    }

    #[tokio::test]
    async fn test_register_then_list_round_trips() {
        let (mediator, _db) = mediator();

        let created = mediator
            .send(RegisterUser {
                username: "alice".to_string(),
            })
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.username, "alice");

        let users = mediator.send(GetAllUsers).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0], created);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_allowed() {
        let (mediator, _db) = mediator();

        let first = mediator
            .send(RegisterUser {
                username: "bob".to_string(),
            })
            .await
            .unwrap();
        let second = mediator
            .send(RegisterUser {
                username: "bob".to_string(),
            })
            .await
            .unwrap();

        // No uniqueness constraint anywhere: same name, distinct IDs.
        assert_ne!(first.id, second.id);

        let users = mediator.send(GetAllUsers).await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_list_is_empty_before_any_registration() {
        let (mediator, _db) = mediator();
        assert!(mediator.send(GetAllUsers).await.unwrap().is_empty());
    }
}
