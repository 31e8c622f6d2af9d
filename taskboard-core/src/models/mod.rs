/// Domain models
///
/// One module per entity type. All models serialize to camelCase JSON to
/// match the HTTP surface (`userId`, `taskItemId`, `isCompleted`,
/// `createdAt`).

pub mod comment;
pub mod task;
pub mod user;

pub use comment::Comment;
pub use task::TaskItem;
pub use user::User;
