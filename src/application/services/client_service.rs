//! Client management service.

use crate::domain::entities::{Client, ClientPatch, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing clients.
///
/// Unlike users, deleted clients are gone from every later listing.
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a new client service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the email is already registered.
    pub async fn create_client(&self, new_client: NewClient) -> Result<Client, AppError> {
        let client = self.repository.create(new_client).await?;
        tracing::info!(client_id = client.id, "Client created");
        Ok(client)
    }

    /// Lists every client.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    pub async fn get_client(&self, id: i64) -> Result<Client, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    pub async fn update_client(&self, id: i64, patch: ClientPatch) -> Result<Client, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    /// Permanently deletes a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    pub async fn delete_client(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(client_not_found(id));
        }

        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}

fn client_not_found(id: i64) -> AppError {
    AppError::not_found("Client not found", json!({ "id": id }))
}
