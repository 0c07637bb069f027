//! User management service.

use crate::domain::entities::{NewUser, User, UserPatch, UserStatus};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing users.
///
/// Each operation performs exactly one repository call. Missing rows are
/// reported as [`AppError::NotFound`].
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an
    /// already registered email.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Lists every user, including soft-deleted ones.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Lists users with status `inactive`.
    pub async fn list_inactive_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list_inactive().await
    }

    /// Lists users that are `inactive` and premium.
    pub async fn list_inactive_premium_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list_inactive_premium().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] if the new email is already registered.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Changes the user status. `Deleted` is the soft delete.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn set_status(&self, id: i64, status: UserStatus) -> Result<User, AppError> {
        let user = self
            .repository
            .set_status(id, status)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        tracing::info!(user_id = id, %status, "User status changed");
        Ok(user)
    }

    /// Upgrades the user to premium.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn make_premium(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .set_premium(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn create_test_user(id: i64, status: UserStatus, premium: bool) -> User {
        User {
            id,
            name: format!("user-{id}"),
            email: format!("user-{id}@example.com"),
            status,
            premium,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_user| new_user.email == "ana@example.com")
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    name: new_user.name,
                    email: new_user.email,
                    status: new_user.status,
                    premium: new_user.premium,
                })
            });

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .create_user(NewUser {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                status: UserStatus::Active,
                premium: false,
            })
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(NewUser {
                name: "Ana".to_string(),
                email: "taken@example.com".to_string(),
                status: UserStatus::Active,
                premium: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.update_user(7, UserPatch::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_status_deleted() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_set_status()
            .withf(|id, status| *id == 3 && *status == UserStatus::Deleted)
            .times(1)
            .returning(|id, status| Ok(Some(create_test_user(id, status, false))));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.set_status(3, UserStatus::Deleted).await.unwrap();

        assert!(user.is_deleted());
    }

    #[tokio::test]
    async fn test_make_premium_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_set_premium()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.make_premium(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_inactive_premium_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![create_test_user(2, UserStatus::Inactive, true)];
        mock_repo
            .expect_list_inactive_premium()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let list = service.list_inactive_premium_users().await.unwrap();

        assert_eq!(list.len(), 1);
        assert!(list[0].premium);
        assert_eq!(list[0].status, UserStatus::Inactive);
    }
}
