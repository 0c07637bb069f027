//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserPatch, UserStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Users are never removed; [`UserRepository::set_status`] with
/// [`UserStatus::Deleted`] is the delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id. `Ok(None)` if the row does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Lists every user, soft-deleted ones included.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Lists users whose status is `inactive`.
    async fn list_inactive(&self) -> Result<Vec<User>, AppError>;

    /// Lists users that are both `inactive` and premium.
    async fn list_inactive_premium(&self) -> Result<Vec<User>, AppError>;

    /// Applies the non-`None` fields of `patch`.
    ///
    /// Returns `Ok(None)` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the new email is already registered.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Overwrites the status. Returns `Ok(None)` if the user does not exist.
    async fn set_status(&self, id: i64, status: UserStatus) -> Result<Option<User>, AppError>;

    /// Marks the user as premium. Returns `Ok(None)` if the user does not exist.
    async fn set_premium(&self, id: i64) -> Result<Option<User>, AppError>;
}
