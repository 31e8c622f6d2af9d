/// Task endpoints
///
/// # Endpoints
///
/// - `POST /api/tasks` - Create a task for an existing user
/// - `GET  /api/tasks` - List tasks, optionally filtered by `?userId=`
///
/// # Errors
///
/// - `400 Bad Request`: `userId` does not resolve to a registered user

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use taskboard_core::features::tasks::{CreateTask, GetAllTasks, GetTasksByUser};
use taskboard_core::models::task::TaskItem;

/// Query parameters for task listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    /// When present, restricts the listing to one user's tasks.
    pub user_id: Option<i64>,
}

/// Create a task
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// {
///   "title": "write report",
///   "userId": 1
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "title": "write report",
///   "isCompleted": false,
///   "userId": 1
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: unknown `userId`
pub async fn create_task(
    State(state): State<AppState>,
    Json(command): Json<CreateTask>,
) -> ApiResult<Json<TaskItem>> {
    let task = state.mediator.send(command).await?;
    Ok(Json(task))
}

/// List tasks
///
/// Without a query string this returns every task in insertion order. With
/// `?userId=N` it returns only that user's tasks; an unknown user yields an
/// empty list, not an error.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<TaskItem>>> {
    let tasks = match query.user_id {
        Some(user_id) => state.mediator.send(GetTasksByUser { user_id }).await?,
        None => state.mediator.send(GetAllTasks).await?,
    };
    Ok(Json(tasks))
}
