//! Handlers for client endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::client::{ClientItem, CreateClientRequest, UpdateClientRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a client.
///
/// # Endpoint
///
/// `POST /clientes`
///
/// # Errors
///
/// Returns 400 if the name or email is invalid.
/// Returns 500 if the email is already registered.
pub async fn create_client_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientItem>), AppError> {
    payload.validate()?;

    let client = state.client_service.create_client(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Lists every client.
///
/// # Endpoint
///
/// `GET /clientes`
pub async fn list_clients_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientItem>>, AppError> {
    let clients = state.client_service.list_clients().await?;
    Ok(Json(clients.into_iter().map(ClientItem::from).collect()))
}

/// Fetches a single client.
///
/// # Endpoint
///
/// `GET /clientes/{id}`
///
/// # Errors
///
/// Returns 404 if the client does not exist.
pub async fn get_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ClientItem>, AppError> {
    let client = state.client_service.get_client(id).await?;
    Ok(Json(client.into()))
}

/// Updates a client. Only supplied fields are changed.
///
/// # Endpoint
///
/// `PUT /clientes/{id}`
///
/// # Errors
///
/// Returns 400 if a supplied field is invalid.
/// Returns 404 if the client does not exist.
pub async fn update_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<Json<ClientItem>, AppError> {
    payload.validate()?;

    let client = state
        .client_service
        .update_client(id, payload.into())
        .await?;

    Ok(Json(client.into()))
}

/// Permanently deletes a client.
///
/// # Endpoint
///
/// `DELETE /clientes/{id}`
///
/// # Errors
///
/// Returns 404 if the client does not exist.
pub async fn delete_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.client_service.delete_client(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
