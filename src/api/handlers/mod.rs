//! HTTP request handlers.
//!
//! Each handler module corresponds to one entity. Every handler performs a
//! single service call.

pub mod clients;
pub mod health;
pub mod tasks;
pub mod users;

pub use clients::{
    create_client_handler, delete_client_handler, get_client_handler, list_clients_handler,
    update_client_handler,
};
pub use health::{health_handler, root_handler};
pub use tasks::{
    create_task_handler, get_task_handler, list_tasks_handler, update_task_handler,
    update_task_status_handler,
};
pub use users::{
    create_user_handler, get_user_handler, list_inactive_premium_users_handler,
    list_inactive_users_handler, list_users_handler, make_premium_handler,
    update_user_handler, update_user_status_handler,
};
