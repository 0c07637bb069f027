//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClientService, TaskService, UserService};
use crate::infrastructure::persistence::{PgClientRepository, PgTaskRepository, PgUserRepository};

/// Services wired to their PostgreSQL repositories, plus the pool itself
/// for health checks.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub task_service: Arc<TaskService<PgTaskRepository>>,
    pub client_service: Arc<ClientService<PgClientRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds the repositories and services on top of an open pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let task_repository = Arc::new(PgTaskRepository::new(pool.clone()));
        let client_repository = Arc::new(PgClientRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            task_service: Arc::new(TaskService::new(task_repository)),
            client_service: Arc::new(ClientService::new(client_repository)),
            db: pool,
        }
    }
}
