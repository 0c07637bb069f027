mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use tasks_api::api::routes::user_routes;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(user_routes().with_state(state)).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ana", "email": "ana@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["status"], "active");
    assert_eq!(json["premium"], false);
}

#[sqlx::test]
async fn test_create_user_email_too_long(pool: PgPool) {
    let server = make_server(pool);
    let email = format!("{}@example.com", "a".repeat(100));

    let response = server
        .post("/users")
        .json(&json!({ "name": "Ana", "email": email }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_user_duplicate_email(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    let server = make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Other", "email": "ana@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(json["error"]["details"].get("constraint").is_none());
}

#[sqlx::test]
async fn test_create_user_accepts_free_form_email(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/users")
        .json(&json!({ "name": "Bob", "email": "bob" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["email"], "bob");
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_users_includes_deleted(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    common::create_test_user(&pool, "Gone", "gone@example.com", "deleted", false).await;
    let server = make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["status"], "deleted");
}

#[sqlx::test]
async fn test_list_users_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_inactive_user_filters(pool: PgPool) {
    common::create_test_user(&pool, "Ana", "ana@example.com", "active", true).await;
    common::create_test_user(&pool, "Idle", "idle@example.com", "inactive", false).await;
    common::create_test_user(&pool, "Vip", "vip@example.com", "inactive", true).await;
    let server = make_server(pool);

    let inactive = server.get("/users/inactivo").await.json::<Vec<Value>>();
    assert_eq!(inactive.len(), 2);
    assert!(inactive.iter().all(|u| u["status"] == "inactive"));

    let premium = server
        .get("/users/inactivo&premium")
        .await
        .json::<Vec<Value>>();
    assert_eq!(premium.len(), 1);
    assert_eq!(premium[0]["name"], "Vip");
}

#[sqlx::test]
async fn test_inactive_premium_filter_with_encoded_ampersand(pool: PgPool) {
    common::create_test_user(&pool, "Idle", "idle@example.com", "inactive", false).await;
    common::create_test_user(&pool, "Vip", "vip@example.com", "inactive", true).await;
    let server = make_server(pool);

    let response = server.get("/users/inactivo%26premium").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Vip");
}

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/users/999999").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["id"], 999999);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_user_partial(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    let server = make_server(pool);

    let response = server
        .patch(&format!("/users/{id}"))
        .json(&json!({ "premium": true }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["premium"], true);
    assert_eq!(json["name"], "Ana");
}

#[sqlx::test]
async fn test_make_premium(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    let server = make_server(pool);

    let response = server.patch(&format!("/users/{id}/premium")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["premium"], true);

    server
        .patch("/users/999999/premium")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_soft_delete_via_status(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    let server = make_server(pool);

    let response = server
        .patch(&format!("/users/{id}/status"))
        .add_query_param("new_status", "deleted")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "deleted");

    let fetched = server.get(&format!("/users/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["status"], "deleted");
}

#[sqlx::test]
async fn test_status_rejects_unknown_value(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ana", "ana@example.com", "active", false).await;
    let server = make_server(pool);

    let response = server
        .patch(&format!("/users/{id}/status"))
        .add_query_param("new_status", "a")
        .await;

    response.assert_status_bad_request();
}
