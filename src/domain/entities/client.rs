//! Client entity.
//!
//! Unlike users, clients are removed from the store when deleted.

use chrono::{DateTime, Utc};

use super::user::UserStatus;

/// A customer account.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
    pub registered_at: DateTime<Utc>,
}

/// Input data for registering a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
}

/// Partial update for an existing client. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<UserStatus>,
    pub premium: Option<bool>,
}
