//! Core domain entities.
//!
//! Entities are plain data structures mapped one-to-one onto table rows.
//!
//! # Entity Types
//!
//! - [`User`] - An account that is soft-deleted through its status
//! - [`Task`] - A unit of work with creation/update timestamps
//! - [`Client`] - A customer account that supports hard deletion
//!
//! # Design Pattern
//!
//! Each entity comes with separate input structs:
//! - `NewUser`, `NewTask`, `NewClient` - For creating new records
//! - `UserPatch`, `TaskPatch`, `ClientPatch` - For partial updates

pub mod client;
pub mod task;
pub mod user;

pub use client::{Client, ClientPatch, NewClient};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
pub use user::{NewUser, User, UserPatch, UserStatus};
