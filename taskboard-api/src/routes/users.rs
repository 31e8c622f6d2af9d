/// User endpoints
///
/// # Endpoints
///
/// - `POST /api/users` - Register a new user
/// - `GET  /api/users` - List all users
///
/// Registration has no validation path; usernames are not unique by design,
/// so both endpoints only ever answer 200.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use taskboard_core::features::users::{GetAllUsers, RegisterUser};
use taskboard_core::models::user::User;

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "username": "alice"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice"
/// }
/// ```
pub async fn register_user(
    State(state): State<AppState>,
    Json(command): Json<RegisterUser>,
) -> ApiResult<Json<User>> {
    let user = state.mediator.send(command).await?;
    Ok(Json(user))
}

/// List all users, insertion order
///
/// # Endpoint
///
/// ```text
/// GET /api/users
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.mediator.send(GetAllUsers).await?;
    Ok(Json(users))
}
