//! Client wrappers for user-directory endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{get_json, AppError},
    features::auth::types::User,
};

/// Fetches the user list from the API.
pub async fn list_users(token: Option<&str>) -> Result<Vec<User>, AppError> {
    get_json("/users", token).await
}

/// Fetches user details by id after basic input validation.
pub async fn get_user(id: &str, token: Option<&str>) -> Result<User, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("User id is required.".to_string()));
    }
    get_json(&format!("/users/{trimmed}"), token).await
}
