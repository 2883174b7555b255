mod common;

use shorten::application::services::{AuthService, LinkService};
use shorten::domain::repositories::UrlRepository;
use shorten::error::ShortenError;
use shorten::infrastructure::persistence::{SqliteCredentialRepository, SqliteUrlRepository};
use std::collections::HashSet;
use std::sync::Arc;

const WRITERS: usize = 16;

fn link_service(pool: &sqlx::SqlitePool) -> Arc<LinkService<SqliteUrlRepository>> {
    Arc::new(LinkService::new(
        Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone()))),
        6,
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_custom_code_binds_once() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::file_pool(&dir, 8).await;
    let service = link_service(&pool);

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                let result = service
                    .create_short_link(&url, Some("contested"), "10.0.0.1")
                    .await;
                result.map(|_| url)
            })
        })
        .collect();

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(url) => winners.push(url),
            Err(ShortenError::CodeConflict) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, WRITERS - 1);

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    let record = repo.find_by_code("contested").await.unwrap().unwrap();
    assert_eq!(record.url, winners[0]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_generated_codes_are_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::file_pool(&dir, 8).await;
    let service = link_service(&pool);

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_short_link(&format!("https://example.com/{i}"), None, "10.0.0.1")
                    .await
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(codes.len(), WRITERS);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, WRITERS as i64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups_count_every_hit() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::file_pool(&dir, 8).await;
    common::insert_url(&pool, "busy", "https://example.com").await;
    let service = link_service(&pool);

    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.lookup("busy").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "https://example.com");
    }

    assert_eq!(common::hits(&pool, "busy").await.0, WRITERS as i64);
}

#[tokio::test]
async fn test_round_trip_through_services() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::file_pool(&dir, 2).await;
    let service = link_service(&pool);

    let code = service
        .create_short_link("https://example.com/a", None, "192.0.2.1")
        .await
        .unwrap();
    assert_eq!(code.len(), 6);

    assert_eq!(service.lookup(&code).await.unwrap(), "https://example.com/a");

    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));
    let record = repo.find_by_code(&code).await.unwrap().unwrap();
    assert_eq!(record.hits, 1);
    assert_eq!(record.created_by, "192.0.2.1");

    let auth = AuthService::new(Arc::new(SqliteCredentialRepository::new(Arc::new(pool))));
    auth.create_user("alice", "secret1").await.unwrap();
    assert!(auth.check_credentials("alice", "secret1").await.unwrap());
    assert!(!auth.check_credentials("alice", "wrong").await.unwrap());
    assert!(matches!(
        auth.check_credentials("bob", "secret1").await,
        Err(ShortenError::NotFound)
    ));
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let pool = common::file_pool(&dir, 1).await;
    link_service(&pool)
        .create_short_link("https://example.com/kept", Some("kept"), "a")
        .await
        .unwrap();
    pool.close().await;

    let pool = common::file_pool(&dir, 1).await;
    assert_eq!(
        link_service(&pool).lookup("kept").await.unwrap(),
        "https://example.com/kept"
    );
}
