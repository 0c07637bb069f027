//! PostgreSQL implementation of task repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTask, Task, TaskPatch, TaskStatus};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

const TASK_COLUMNS: &str = "id, name, description, created_at, updated_at, status";

/// PostgreSQL repository for tasks.
///
/// Timestamps come from the database clock (`NOW()`), so `created_at` and
/// `updated_at` are identical for a freshly inserted row.
pub struct PgTaskRepository {
    pool: Arc<PgPool>,
}

impl PgTaskRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (name, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(new_task.name)
        .bind(new_task.description)
        .bind(new_task.status)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tasks)
    }

    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks SET
                name        = COALESCE($2, name),
                description = COALESCE($3, description),
                status      = COALESCE($4, status),
                created_at  = COALESCE($5, created_at),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.status)
        .bind(patch.created_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(task)
    }

    async fn set_status(&self, id: i64, status: TaskStatus) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            UPDATE tasks SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(task)
    }
}
