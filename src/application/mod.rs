//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a single call per
//! operation. They are where an absent row becomes
//! [`crate::error::AppError::NotFound`].
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Users, status filters, premium upgrades
//! - [`services::task_service::TaskService`] - Tasks and their status
//! - [`services::client_service::ClientService`] - Clients with hard delete

pub mod services;
