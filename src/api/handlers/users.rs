//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem, UserStatusQuery};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

fn to_items(users: Vec<User>) -> Json<Vec<UserItem>> {
    Json(users.into_iter().map(UserItem::from).collect())
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the name or email is invalid.
/// Returns 500 if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists every user, soft-deleted ones included.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    Ok(to_items(state.user_service.list_users().await?))
}

/// Lists inactive users.
///
/// # Endpoint
///
/// `GET /users/inactivo`
pub async fn list_inactive_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    Ok(to_items(state.user_service.list_inactive_users().await?))
}

/// Lists users that are inactive and premium.
///
/// # Endpoint
///
/// `GET /users/inactivo&premium`
pub async fn list_inactive_premium_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    Ok(to_items(
        state.user_service.list_inactive_premium_users().await?,
    ))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /users/{id}`
///
/// # Request Body
///
/// ```json
/// { "name": "New name", "email": "new@example.com", "status": "inactive", "premium": true }
/// ```
///
/// All fields are optional; absent or `null` fields are left unchanged.
///
/// # Errors
///
/// Returns 400 if a supplied field is invalid.
/// Returns 404 if the user does not exist.
/// Returns 500 if the new email is already registered.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    let user = state.user_service.update_user(id, payload.into()).await?;

    Ok(Json(user.into()))
}

/// Upgrades a user to premium.
///
/// # Endpoint
///
/// `PATCH /users/{id}/premium`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn make_premium_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.make_premium(id).await?;
    Ok(Json(user.into()))
}

/// Changes a user's status. `deleted` soft-deletes the user.
///
/// # Endpoint
///
/// `PATCH /users/{id}/status?new_status=active|inactive|deleted`
///
/// # Errors
///
/// Returns 400 if `new_status` is missing or unknown.
/// Returns 404 if the user does not exist.
pub async fn update_user_status_handler(
    Path(id): Path<i64>,
    Query(query): Query<UserStatusQuery>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.set_status(id, query.new_status).await?;
    Ok(Json(user.into()))
}
