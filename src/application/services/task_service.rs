//! Task management service.

use crate::domain::entities::{NewTask, Task, TaskPatch, TaskStatus};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing tasks.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a new task service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task. Status defaults are resolved by the caller.
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, AppError> {
        let task = self.repository.create(new_task).await?;
        tracing::info!(task_id = task.id, status = %task.status, "Task created");
        Ok(task)
    }

    /// Lists every task.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    pub async fn get_task(&self, id: i64) -> Result<Task, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    /// Applies a partial update. An empty patch still refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    pub async fn update_task(&self, id: i64, patch: TaskPatch) -> Result<Task, AppError> {
        if patch.is_empty() {
            tracing::debug!(task_id = id, "Empty task patch, touching updated_at only");
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| task_not_found(id))
    }

    /// Changes the task status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    pub async fn set_status(&self, id: i64, status: TaskStatus) -> Result<Task, AppError> {
        self.repository
            .set_status(id, status)
            .await?
            .ok_or_else(|| task_not_found(id))
    }
}

fn task_not_found(id: i64) -> AppError {
    AppError::not_found("Task not found", json!({ "id": id }))
}
