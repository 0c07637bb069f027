//! PostgreSQL implementation of client repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Client, ClientPatch, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;

const CLIENT_COLUMNS: &str = "id, name, email, status, premium, registered_at";

/// PostgreSQL repository for clients. Deletes are physical.
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            INSERT INTO clients (name, email, status, premium)
            VALUES ($1, $2, $3, $4)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(new_client.name)
        .bind(new_client.email)
        .bind(new_client.status)
        .bind(new_client.premium)
        .fetch_one(self.pool.as_ref())
        .await?;

        tracing::debug!(client_id = client.id, "Client created");
        Ok(client)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(client)
    }

    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(clients)
    }

    async fn update(&self, id: i64, patch: ClientPatch) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            r#"
            UPDATE clients SET
                name    = COALESCE($2, name),
                email   = COALESCE($3, email),
                status  = COALESCE($4, status),
                premium = COALESCE($5, premium)
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.status)
        .bind(patch.premium)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(client)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
