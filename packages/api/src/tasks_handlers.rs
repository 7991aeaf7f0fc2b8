// ABOUTME: HTTP request handlers for task operations
// ABOUTME: CRUD for tasks and assigning users to them

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskdeck_models::{CreateTaskRequest, Task, UpdateTaskRequest, ValidationErrors};
use tracing::info;

use crate::error::ApiResult;
use crate::DbState;

fn check_required(errors: &mut ValidationErrors, field: &str, value: Option<&str>, message: &str) {
    if let Some(value) = value {
        if value.trim().is_empty() {
            errors.add(field, message);
        }
    }
}

fn validate_task_fields(title: Option<&str>, description: Option<&str>) -> ApiResult<()> {
    let mut errors = ValidationErrors::new();
    check_required(&mut errors, "title", title, "Title is required");
    check_required(&mut errors, "description", description, "Description is required");
    errors.into_result(()).map_err(Into::into)
}

/// List all tasks with their assigned users
pub async fn list_tasks(State(db): State<DbState>) -> ApiResult<Json<Vec<Task>>> {
    info!("Listing tasks");

    let tasks = db.task_storage.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a single task by ID
pub async fn get_task(
    State(db): State<DbState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<Task>> {
    info!("Getting task: {}", task_id);

    let task = db.task_storage.get_task(&task_id).await?;
    Ok(Json(task))
}

/// Create a new task
pub async fn create_task(
    State(db): State<DbState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    info!("Creating task: {}", request.title);

    validate_task_fields(Some(&request.title), Some(&request.description))?;

    let input = CreateTaskRequest {
        title: request.title.trim().to_string(),
        description: request.description.trim().to_string(),
        ..request
    };

    let task = db.task_storage.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update an existing task; omitted fields keep their current value
pub async fn update_task(
    State(db): State<DbState>,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    info!("Updating task: {}", task_id);

    validate_task_fields(request.title.as_deref(), request.description.as_deref())?;

    let input = UpdateTaskRequest {
        title: request.title.map(|t| t.trim().to_string()),
        description: request.description.map(|d| d.trim().to_string()),
        ..request
    };

    let task = db.task_storage.update_task(&task_id, input).await?;
    Ok(Json(task))
}

/// Delete a task
pub async fn delete_task(
    State(db): State<DbState>,
    Path(task_id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("Deleting task: {}", task_id);

    db.task_storage.delete_task(&task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign a user to a task
pub async fn assign_user(
    State(db): State<DbState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<Task>> {
    info!("Assigning user {} to task {}", user_id, task_id);

    let task = db.task_storage.assign_user(&task_id, &user_id).await?;
    Ok(Json(task))
}

/// Remove a user from a task
pub async fn unassign_user(
    State(db): State<DbState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<Task>> {
    info!("Removing user {} from task {}", user_id, task_id);

    let task = db.task_storage.unassign_user(&task_id, &user_id).await?;
    Ok(Json(task))
}
