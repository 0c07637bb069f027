//! Business logic services for the application layer.

pub mod client_service;
pub mod task_service;
pub mod user_service;

pub use client_service::ClientService;
pub use task_service::TaskService;
pub use user_service::UserService;
