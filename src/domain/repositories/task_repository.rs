//! Repository trait for task data access.

use crate::domain::entities::{NewTask, Task, TaskPatch, TaskStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing tasks.
///
/// Every write advances `updated_at`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTaskRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task with `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError>;

    /// Finds a task by id. `Ok(None)` if the row does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;

    /// Lists every task.
    async fn list(&self) -> Result<Vec<Task>, AppError>;

    /// Applies the non-`None` fields of `patch` and touches `updated_at`,
    /// also when the patch is empty.
    ///
    /// Returns `Ok(None)` if the task does not exist.
    async fn update(&self, id: i64, patch: TaskPatch) -> Result<Option<Task>, AppError>;

    /// Overwrites the status and touches `updated_at`.
    ///
    /// Returns `Ok(None)` if the task does not exist.
    async fn set_status(&self, id: i64, status: TaskStatus) -> Result<Option<Task>, AppError>;
}
