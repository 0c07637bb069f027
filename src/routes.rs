//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - Welcome message
//! - `GET /health`    - Database health check
//! - `/tasks/*`       - Task CRUD
//! - `/users/*`       - User CRUD, named filters, soft delete via status
//! - `/clientes/*`    - Client CRUD with hard delete
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - `/tasks/` and `/tasks` reach the same handler

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
