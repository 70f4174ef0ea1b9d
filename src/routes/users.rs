//! User directory API routes

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::services::user::UserService;
use crate::state::AppState;
use crate::types::{CreateUserRequest, UserResponse};
use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use validator::Validate;

/// Create user directory routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).get(list_users))
}

/// POST /api/users - Create a new user
async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = UserService::create_user(state.db(), &req.username).await?;

    Ok(Json(UserResponse {
        username: user.username,
        id: user.id.to_string(),
    }))
}

/// GET /api/users - List all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserService::list_users(state.db()).await?;

    let response: Vec<UserResponse> = users
        .into_iter()
        .map(|u| UserResponse {
            username: u.username,
            id: u.id.to_string(),
        })
        .collect();

    Ok(Json(response))
}
