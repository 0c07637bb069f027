#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tasks_api::state::AppState;

pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    status: &str,
    premium: bool,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (name, email, status, premium) VALUES ($1, $2, $3::user_status, $4) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(status)
    .bind(premium)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_task(pool: &PgPool, name: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tasks (name, description, status) VALUES ($1, 'test task', $2::task_status) RETURNING id",
    )
    .bind(name)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_client(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO clients (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}
