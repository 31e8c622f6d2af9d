/// Comments feature
///
/// Adding a comment carries the strictest validation in the system: the text
/// must be non-empty after trimming, and both foreign keys must resolve.
/// Listing sorts by `created_at` ascending at the handler level; the store
/// only knows insertion order.

use crate::db::Database;
use crate::dispatch::{MediatorBuilder, Request, RequestHandler};
use crate::error::{HandlerError, HandlerResult};
use crate::models::comment::Comment;
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Command: add a comment to an existing task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddComment {
    /// Task to comment on; must resolve.
    pub task_item_id: i64,

    /// Author; must resolve.
    pub user_id: i64,

    /// Comment body; must be non-empty after trimming whitespace.
    pub text: String,
}

impl Request for AddComment {
    type Response = Comment;
}

/// Query: list the comments on one task, ascending by creation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetComments {
    pub task_item_id: i64,
}

impl Request for GetComments {
    type Response = Vec<Comment>;
}

/// Handles `AddComment`.
pub struct AddCommentHandler {
    db: Arc<Database>,
}

impl AddCommentHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<AddComment> for AddCommentHandler {
    async fn handle(&self, request: AddComment) -> HandlerResult<Comment> {
        if request.text.trim().is_empty() {
            return Err(HandlerError::InvalidArgument(
                "comment text cannot be empty".to_string(),
            ));
        }

        if !self.db.tasks.contains(request.task_item_id) {
            return Err(HandlerError::ReferenceNotFound(format!(
                "task {} does not exist",
                request.task_item_id
            )));
        }
        if !self.db.users.contains(request.user_id) {
            return Err(HandlerError::ReferenceNotFound(format!(
                "user {} does not exist",
                request.user_id
            )));
        }

        let comment = self.db.comments.insert_with(|id| Comment {
            id,
            task_item_id: request.task_item_id,
            user_id: request.user_id,
            text: request.text,
            created_at: Utc::now(),
        });
        tracing::debug!(
            comment_id = comment.id,
            task_id = comment.task_item_id,
            "comment added"
        );
        Ok(comment)
    }
}

/// Handles `GetComments`.
pub struct GetCommentsHandler {
    db: Arc<Database>,
}

impl GetCommentsHandler {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler<GetComments> for GetCommentsHandler {
    async fn handle(&self, request: GetComments) -> HandlerResult<Vec<Comment>> {
        let mut comments = self
            .db
            .comments
            .filter(|comment| comment.task_item_id == request.task_item_id);
        comments.sort_by_key(|comment| comment.created_at);
        Ok(comments)
    }
}

/// Wires the comments feature into the dispatcher.
pub fn register(builder: MediatorBuilder, db: &Arc<Database>) -> MediatorBuilder {
    builder
        .register::<AddComment, _>(AddCommentHandler::new(db.clone()))
        .register::<GetComments, _>(GetCommentsHandler::new(db.clone()))
}
