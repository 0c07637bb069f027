//! DTOs for task endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewTask, Task, TaskPatch, TaskStatus};

/// Request body for `POST /tasks`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 100))]
    pub description: String,

    /// Defaults to `pending`.
    pub status: Option<TaskStatus>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            status: req.status.unwrap_or_default(),
        }
    }
}

/// Request body for `PATCH /tasks/{id}`.
///
/// Absent and `null` fields are both left unchanged; `updated_at` is always
/// refreshed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,

    /// RFC 3339 timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            status: req.status,
            created_at: req.created_at,
        }
    }
}

/// Query string of `PATCH /tasks/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct TaskStatusQuery {
    pub new_status: TaskStatus,
}

/// Task as returned by the API.
#[derive(Debug, Serialize)]
pub struct TaskItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: TaskStatus,
}

impl From<Task> for TaskItem {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            created_at: t.created_at,
            updated_at: t.updated_at,
            status: t.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_to_pending() {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"name": "X", "description": "Y"}"#).unwrap();
        assert!(req.validate().is_ok());

        assert_eq!(NewTask::from(req).status, TaskStatus::Pending);
    }

    #[test]
    fn test_description_length_limit() {
        let req = CreateTaskRequest {
            name: "X".to_string(),
            description: "d".repeat(101),
            status: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_parses_timestamp_and_status() {
        let req: UpdateTaskRequest = serde_json::from_str(
            r#"{"status": "in_progress", "created_at": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        let patch = TaskPatch::from(req);
        assert_eq!(patch.status, Some(TaskStatus::InProgress));
        assert!(patch.created_at.is_some());
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_empty_update_request_is_empty_patch() {
        let req: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(TaskPatch::from(req).is_empty());
    }
}
