//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries (`query_as` + `FromRow`), so the crate builds without a live
//! database or an offline query cache.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users and their named filters
//! - [`PgTaskRepository`] - Tasks
//! - [`PgClientRepository`] - Clients
//!
//! [`create_pool`] builds the shared connection pool handed to all of them.

pub mod pg_client_repository;
pub mod pg_task_repository;
pub mod pg_user_repository;
pub mod pool;

pub use pg_client_repository::PgClientRepository;
pub use pg_task_repository::PgTaskRepository;
pub use pg_user_repository::PgUserRepository;
pub use pool::create_pool;
