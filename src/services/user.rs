//! User directory service

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;

/// User directory service
pub struct UserService;

impl UserService {
    /// Create a new user
    ///
    /// Usernames are not unique: repeated names create distinct users.
    pub async fn create_user(pool: &PgPool, username: &str) -> Result<UserRecord, ApiError> {
        UserRepository::create(pool, username)
            .await
            .map_err(ApiError::Internal)
    }

    /// List all users
    pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRecord>, ApiError> {
        UserRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)
    }

    /// Resolve a raw path id to an existing user
    ///
    /// An id that does not parse as a UUID cannot name an existing user,
    /// so it reports NotFound rather than a validation error.
    pub async fn require_user(pool: &PgPool, raw_id: &str) -> Result<UserRecord, ApiError> {
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

        UserRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}
