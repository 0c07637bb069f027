//! Handlers for task endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::task::{CreateTaskRequest, TaskItem, TaskStatusQuery, UpdateTaskRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a task. `status` defaults to `pending`.
///
/// # Endpoint
///
/// `POST /tasks`
///
/// # Request Body
///
/// ```json
/// { "name": "Write report", "description": "Q3 numbers" }
/// ```
///
/// # Errors
///
/// Returns 400 if the name or description is invalid.
pub async fn create_task_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskItem>), AppError> {
    payload.validate()?;

    let task = state.task_service.create_task(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Lists every task.
///
/// # Endpoint
///
/// `GET /tasks`
pub async fn list_tasks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskItem>>, AppError> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(tasks.into_iter().map(TaskItem::from).collect()))
}

/// Fetches a single task.
///
/// # Endpoint
///
/// `GET /tasks/{id}`
///
/// # Errors
///
/// Returns 404 if the task does not exist.
pub async fn get_task_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TaskItem>, AppError> {
    let task = state.task_service.get_task(id).await?;
    Ok(Json(task.into()))
}

/// Partially updates a task and refreshes `updated_at`.
///
/// # Endpoint
///
/// `PATCH /tasks/{id}`
///
/// # Errors
///
/// Returns 400 if a supplied field is invalid.
/// Returns 404 if the task does not exist.
pub async fn update_task_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskItem>, AppError> {
    payload.validate()?;

    let task = state.task_service.update_task(id, payload.into()).await?;

    Ok(Json(task.into()))
}

/// Changes a task's status and refreshes `updated_at`.
///
/// # Endpoint
///
/// `PATCH /tasks/{id}/status?new_status=pending|in_progress|completed|cancelled`
///
/// # Errors
///
/// Returns 400 if `new_status` is missing or unknown.
/// Returns 404 if the task does not exist.
pub async fn update_task_status_handler(
    Path(id): Path<i64>,
    Query(query): Query<TaskStatusQuery>,
    State(state): State<AppState>,
) -> Result<Json<TaskItem>, AppError> {
    let task = state.task_service.set_status(id, query.new_status).await?;
    Ok(Json(task.into()))
}
