/// Comment endpoints
///
/// # Endpoints
///
/// - `POST /api/comments` - Add a comment to a task
/// - `GET  /api/comments` - List a task's comments, ascending by creation time
///
/// # Errors
///
/// - `400 Bad Request`: blank comment text, or `taskItemId`/`userId` does
///   not resolve

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use taskboard_core::features::comments::{AddComment, GetComments};
use taskboard_core::models::comment::Comment;

/// Query parameters for comment listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsQuery {
    /// Task whose comments to list.
    pub task_item_id: i64,
}

/// Add a comment
///
/// # Endpoint
///
/// ```text
/// POST /api/comments
/// Content-Type: application/json
///
/// {
///   "taskItemId": 1,
///   "userId": 1,
///   "text": "looks good"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: empty text after trimming, or unresolved references
pub async fn add_comment(
    State(state): State<AppState>,
    Json(command): Json<AddComment>,
) -> ApiResult<Json<Comment>> {
    let comment = state.mediator.send(command).await?;
    Ok(Json(comment))
}

/// List a task's comments, ascending by `createdAt`
///
/// # Endpoint
///
/// ```text
/// GET /api/comments?taskItemId=1
/// ```
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
    let comments = state
        .mediator
        .send(GetComments {
            task_item_id: query.task_item_id,
        })
        .await?;
    Ok(Json(comments))
}
