mod common;

use axum::{Router, body::Body, http::Request, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;
use tasks_api::api::handlers::{health_handler, root_handler};
use tasks_api::routes::app_router;
use tower::ServiceExt;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_root_welcome(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Hello World");
}

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_trailing_slash_is_trimmed(pool: PgPool) {
    let app = app_router(common::create_test_state(pool));

    let response = app
        .oneshot(Request::get("/tasks/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
}
