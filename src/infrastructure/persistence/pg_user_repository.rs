//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch, UserStatus};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

const USER_COLUMNS: &str = "id, name, email, status, premium";

/// PostgreSQL repository for users.
///
/// Every operation is a single statement; writes return the stored row via
/// `RETURNING`.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, status, premium)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new_user.name)
        .bind(new_user.email)
        .bind(new_user.status)
        .bind(new_user.premium)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, status, premium FROM users ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn list_inactive(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, status, premium
            FROM users
            WHERE status = 'inactive'
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn list_inactive_premium(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, status, premium
            FROM users
            WHERE status = 'inactive' AND premium = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name    = COALESCE($2, name),
                email   = COALESCE($3, email),
                status  = COALESCE($4, status),
                premium = COALESCE($5, premium)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.status)
        .bind(patch.premium)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn set_status(&self, id: i64, status: UserStatus) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET status = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn set_premium(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET premium = TRUE WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }
}
