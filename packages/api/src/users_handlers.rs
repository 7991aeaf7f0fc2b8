// ABOUTME: HTTP request handlers for user operations
// ABOUTME: Create, list, update and delete users; emails must be valid and unique

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskdeck_models::{CreateUserRequest, UpdateUserRequest, User};
use taskdeck_users::{validate_update, UserForm};
use tracing::info;

use crate::error::ApiResult;
use crate::DbState;

pub async fn list_users(State(db): State<DbState>) -> ApiResult<Json<Vec<User>>> {
    info!("Listing users");

    let users = db.user_storage.list_users().await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(db): State<DbState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    info!("Creating user: {}", request.username);

    let input = UserForm {
        username: request.username,
        email: request.email,
    }
    .validate()?;

    let user = db.user_storage.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(db): State<DbState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    info!("Updating user: {}", user_id);

    let input = validate_update(&request)?;
    let user = db.user_storage.update_user(&user_id, input).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(db): State<DbState>,
    Path(user_id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("Deleting user: {}", user_id);

    db.user_storage.delete_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
