//! DTOs for client endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Client, ClientPatch, NewClient, UserStatus};

/// Request body for `POST /clientes`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 100))]
    pub email: String,

    pub status: Option<UserStatus>,

    pub premium: Option<bool>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            status: req.status.unwrap_or_default(),
            premium: req.premium.unwrap_or(false),
        }
    }
}

/// Request body for `PUT /clientes/{id}`. Only supplied fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    pub email: Option<String>,

    pub status: Option<UserStatus>,

    pub premium: Option<bool>,
}

impl From<UpdateClientRequest> for ClientPatch {
    fn from(req: UpdateClientRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            status: req.status,
            premium: req.premium,
        }
    }
}

/// Client as returned by the API.
#[derive(Debug, Serialize)]
pub struct ClientItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub premium: bool,
    pub registered_at: DateTime<Utc>,
}

impl From<Client> for ClientItem {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            status: c.status,
            premium: c.premium,
            registered_at: c.registered_at,
        }
    }
}
