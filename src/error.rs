//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service, repository and handler layers
//! returns [`AppError`]. Handlers propagate it with `?` and axum renders it
//! through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Task not found", "details": { "id": 7 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::error!(
                constraint = db.constraint().unwrap_or_default(),
                error = %e,
                "Unique constraint violation"
            );
            return AppError::internal("Database error", json!({}));
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, max = 3))]
        name: String,
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_request("bad", json!({})), StatusCode::BAD_REQUEST),
            (AppError::not_found("missing", json!({})), StatusCode::NOT_FOUND),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_info_keeps_message_and_details() {
        let info = AppError::not_found("Task not found", json!({ "id": 7 })).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Task not found");
        assert_eq!(info.details["id"], 7);
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::internal("Database error", json!({}));
        assert_eq!(err.to_string(), "Database error");
    }

    #[test]
    fn test_validation_errors_become_bad_request() {
        let errors = Named {
            name: "too long".to_string(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);

        assert!(matches!(err, AppError::Validation { .. }));
        let info = err.to_error_info();
        assert!(info.details.get("name").is_some());
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
