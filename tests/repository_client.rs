mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tasks_api::domain::entities::{ClientPatch, NewClient, UserStatus};
use tasks_api::domain::repositories::ClientRepository;
use tasks_api::error::AppError;
use tasks_api::infrastructure::persistence::PgClientRepository;

#[sqlx::test]
async fn test_create_client(pool: PgPool) {
    let repo = PgClientRepository::new(Arc::new(pool));

    let client = repo
        .create(NewClient {
            name: "Acme".to_string(),
            email: "acme@example.com".to_string(),
            status: UserStatus::Active,
            premium: true,
        })
        .await
        .unwrap();

    assert_eq!(client.name, "Acme");
    assert!(client.premium);
    assert_eq!(repo.find_by_id(client.id).await.unwrap(), Some(client));
}

#[sqlx::test]
async fn test_duplicate_client_email(pool: PgPool) {
    common::create_test_client(&pool, "Acme", "acme@example.com").await;
    let repo = PgClientRepository::new(Arc::new(pool));

    let result = repo
        .create(NewClient {
            name: "Acme 2".to_string(),
            email: "acme@example.com".to_string(),
            status: UserStatus::Active,
            premium: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}

#[sqlx::test]
async fn test_update_client(pool: PgPool) {
    let id = common::create_test_client(&pool, "Acme", "acme@example.com").await;
    let repo = PgClientRepository::new(Arc::new(pool));

    let patch = ClientPatch {
        status: Some(UserStatus::Inactive),
        ..Default::default()
    };
    let client = repo.update(id, patch).await.unwrap().unwrap();

    assert_eq!(client.status, UserStatus::Inactive);
    assert_eq!(client.email, "acme@example.com");
    assert!(
        repo.update(999_999, ClientPatch::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_delete_client(pool: PgPool) {
    let keep = common::create_test_client(&pool, "Keep", "keep@example.com").await;
    let gone = common::create_test_client(&pool, "Gone", "gone@example.com").await;
    let repo = PgClientRepository::new(Arc::new(pool));

    assert!(repo.delete(gone).await.unwrap());
    assert!(!repo.delete(gone).await.unwrap());

    let ids: Vec<i64> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![keep]);
    assert!(repo.find_by_id(gone).await.unwrap().is_none());
}
