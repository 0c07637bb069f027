//! Repository trait for client data access.

use crate::domain::entities::{Client, ClientPatch, NewClient};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing clients.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError>;

    /// Finds a client by id. `Ok(None)` if the row does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError>;

    /// Lists every client.
    async fn list(&self) -> Result<Vec<Client>, AppError>;

    /// Applies the non-`None` fields of `patch`.
    ///
    /// Returns `Ok(None)` if the client does not exist.
    async fn update(&self, id: i64, patch: ClientPatch) -> Result<Option<Client>, AppError>;

    /// Permanently removes a client.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
