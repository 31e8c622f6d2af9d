/// Tasks feature
///
/// Task creation is the first place referential integrity matters: the store
/// enforces no foreign keys, so `CreateTaskHandler` checks that `user_id`
/// resolves before writing anything. Filtering by an unknown user is not an
/// error; it yields an empty list.

use crate::db::Database;
use crate::dispatch::{MediatorBuilder, Request, RequestHandler};
use crate::error::{HandlerError, HandlerResult};
use crate::models::task::TaskItem;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Command: create a task owned by an existing user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Task title.
    pub title: String,

    /// Owning user; must resolve to a registered `User`.
    pub user_id: i64,
}

impl Request for CreateTask {
    type Response = TaskItem;
}

/// Query: list all tasks, insertion order.
#[derive(Debug, Clone, Default)]
pub struct GetAllTasks;

impl Request for GetAllTasks {
    type Response = Vec<TaskItem>;
}

/// Query: list the tasks owned by one user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksByUser {
    pub user_id: i64,
}

impl Request for GetTasksByUser {
    type Response = Vec<TaskItem>;
}

/// Handles `CreateTask`.
pub struct CreateTaskHandler {
    db: Arc<Database>,
}

impl CreateTaskHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<CreateTask> for CreateTaskHandler {
    async fn handle(&self, request: CreateTask) -> HandlerResult<TaskItem> {
        // Validation precedes mutation: a rejected request writes nothing.
        if !self.db.users.contains(request.user_id) {
            return Err(HandlerError::ReferenceNotFound(format!(
                "user {} does not exist",
                request.user_id
            )));
        }

        let task = self.db.tasks.insert_with(|id| TaskItem {
            id,
            title: request.title,
            is_completed: false,
            user_id: request.user_id,
        });
        tracing::debug!(task_id = task.id, user_id = task.user_id, "task created");
        Ok(task)
    }
}

/// Handles `GetAllTasks`.
pub struct GetAllTasksHandler {
    db: Arc<Database>,
}

impl GetAllTasksHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<GetAllTasks> for GetAllTasksHandler {
    async fn handle(&self, _request: GetAllTasks) -> HandlerResult<Vec<TaskItem>> {
        Ok(self.db.tasks.list())
    }
}

/// Handles `GetTasksByUser`.
pub struct GetTasksByUserHandler {
    db: Arc<Database>,
}

impl GetTasksByUserHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<GetTasksByUser> for GetTasksByUserHandler {
    async fn handle(&self, request: GetTasksByUser) -> HandlerResult<Vec<TaskItem>> {
        // An unknown user is not an error here, just an empty result.
        Ok(self.db.tasks.filter(|task| task.user_id == request.user_id))
    }
}

/// Wires the tasks feature into the dispatcher.
pub fn register(builder: MediatorBuilder, db: &Arc<Database>) -> MediatorBuilder {
    builder
        .register::<CreateTask, _>(CreateTaskHandler::new(db.clone()))
        .register::<GetAllTasks, _>(GetAllTasksHandler::new(db.clone()))
        .register::<GetTasksByUser, _>(GetTasksByUserHandler::new(db.clone()))
}
