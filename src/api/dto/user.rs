//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserPatch, UserStatus};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 100))]
    pub email: String,

    /// Defaults to `active`.
    pub status: Option<UserStatus>,

    /// Defaults to `false`.
    pub premium: Option<bool>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            status: req.status.unwrap_or_default(),
            premium: req.premium.unwrap_or(false),
        }
    }
}

/// Request body for `PATCH /users/{id}`.
///
/// Absent and `null` fields are both left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub email: Option<String>,

    pub status: Option<UserStatus>,

    pub premium: Option<bool>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            status: req.status,
            premium: req.premium,
        }
    }
}

/// Query string of `PATCH /users/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UserStatusQuery {
    pub new_status: UserStatus,
}

/// User as returned by the API.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            status: u.status,
            premium: u.premium,
        }
    }
}
