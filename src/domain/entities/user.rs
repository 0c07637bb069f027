//! User entity and its account status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status shared by users and clients.
///
/// Users are never removed from the store; "deleting" one moves it to
/// [`UserStatus::Deleted`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "user_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Deleted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
}

impl User {
    /// Returns true if the user has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.status == UserStatus::Deleted
    }
}

/// Input data for creating a new user.
///
/// Defaults (`active`, non-premium) are resolved before the insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
}

/// Partial update for an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<UserStatus>,
    pub premium: Option<bool>,
}
