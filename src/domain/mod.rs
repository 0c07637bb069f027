//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (users, tasks, clients)
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP layer; repository traits
//! are implemented by [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
