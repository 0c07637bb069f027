//! API route configuration.
//!
//! No route requires authentication.

use crate::api::handlers::{
    create_client_handler, create_task_handler, create_user_handler, delete_client_handler,
    get_client_handler, get_task_handler, get_user_handler, list_clients_handler,
    list_inactive_premium_users_handler, list_inactive_users_handler, list_tasks_handler,
    list_users_handler, make_premium_handler, update_client_handler, update_task_handler,
    update_task_status_handler, update_user_handler, update_user_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// Task routes.
///
/// # Endpoints
///
/// - `POST  /tasks`               - Create a task
/// - `GET   /tasks`               - List tasks
/// - `GET   /tasks/{id}`          - Fetch a task
/// - `PATCH /tasks/{id}`          - Partially update a task
/// - `PATCH /tasks/{id}/status`   - Change status (`?new_status=`)
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler).patch(update_task_handler),
        )
        .route("/tasks/{id}/status", patch(update_task_status_handler))
}

/// User routes.
///
/// # Endpoints
///
/// - `POST  /users`                    - Create a user
/// - `GET   /users`                    - List users
/// - `GET   /users/inactivo`           - Inactive users
/// - `GET   /users/inactivo&premium`   - Inactive premium users
///   (also matched with the `&` percent-encoded as `%26`)
/// - `GET   /users/{id}`               - Fetch a user
/// - `PATCH /users/{id}`               - Partially update a user
/// - `PATCH /users/{id}/premium`       - Upgrade to premium
/// - `PATCH /users/{id}/status`        - Change status (`?new_status=`)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/inactivo", get(list_inactive_users_handler))
        .route(
            "/users/inactivo&premium",
            get(list_inactive_premium_users_handler),
        )
        // matching runs on the raw path, so the encoded form needs its own route
        .route(
            "/users/inactivo%26premium",
            get(list_inactive_premium_users_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler).patch(update_user_handler),
        )
        .route("/users/{id}/premium", patch(make_premium_handler))
        .route("/users/{id}/status", patch(update_user_status_handler))
}

/// Client routes.
///
/// # Endpoints
///
/// - `POST   /clientes`        - Register a client
/// - `GET    /clientes`        - List clients
/// - `GET    /clientes/{id}`   - Fetch a client
/// - `PUT    /clientes/{id}`   - Update a client
/// - `DELETE /clientes/{id}`   - Delete a client
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clientes",
            get(list_clients_handler).post(create_client_handler),
        )
        .route(
            "/clientes/{id}",
            get(get_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        )
}

/// All entity routes merged.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(task_routes())
        .merge(user_routes())
        .merge(client_routes())
}
