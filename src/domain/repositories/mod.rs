//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Users, named status filters, soft delete via status
//! - [`TaskRepository`] - Tasks with timestamp bookkeeping
//! - [`ClientRepository`] - Clients with hard delete
//!
//! # Absence
//!
//! A missing row is `Ok(None)` (or `Ok(false)` for deletes), never an error.
//! Services decide whether absence should become [`crate::error::AppError::NotFound`].

pub mod client_repository;
pub mod task_repository;
pub mod user_repository;

pub use client_repository::ClientRepository;
pub use task_repository::TaskRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
