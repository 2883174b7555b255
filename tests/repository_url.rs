mod common;

use shorten::domain::entities::NewUrl;
use shorten::domain::repositories::UrlRepository;
use shorten::error::ShortenError;
use shorten::infrastructure::persistence::SqliteUrlRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_url() {
    let pool = common::memory_pool().await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let before = chrono::Utc::now().timestamp();
    repo.create_url(NewUrl::new("abc123", "https://example.com", "192.0.2.1"))
        .await
        .unwrap();

    let record = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(record.code, "abc123");
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.created_by, "192.0.2.1");
    assert_eq!(record.hits, 0);
    assert_eq!(record.last_hit, None);
    assert!(record.created_at >= before);
}

#[tokio::test]
async fn test_create_duplicate_code() {
    let pool = common::memory_pool().await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    repo.create_url(NewUrl::new("dup", "https://first.com", "a"))
        .await
        .unwrap();
    let result = repo
        .create_url(NewUrl::new("dup", "https://second.com", "b"))
        .await;

    assert!(matches!(result, Err(ShortenError::DuplicateCode)));

    let record = repo.find_by_code("dup").await.unwrap().unwrap();
    assert_eq!(record.url, "https://first.com");
    assert_eq!(record.created_by, "a");
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let pool = common::memory_pool().await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    repo.create_url(NewUrl::new("AbC", "https://upper.com", "a"))
        .await
        .unwrap();
    repo.create_url(NewUrl::new("abc", "https://lower.com", "a"))
        .await
        .unwrap();

    assert_eq!(repo.lookup_url("AbC").await.unwrap(), "https://upper.com");
    assert_eq!(repo.lookup_url("abc").await.unwrap(), "https://lower.com");
}

#[tokio::test]
async fn test_lookup_counts_hits() {
    let pool = common::memory_pool().await;
    common::insert_url(&pool, "hit", "https://example.com/page").await;
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    assert_eq!(common::hits(&pool, "hit").await, (0, None));

    let url = repo.lookup_url("hit").await.unwrap();
    assert_eq!(url, "https://example.com/page");

    let (hits, first_hit) = common::hits(&pool, "hit").await;
    assert_eq!(hits, 1);
    let first_hit = first_hit.unwrap();

    repo.lookup_url("hit").await.unwrap();
    repo.lookup_url("hit").await.unwrap();

    let (hits, last_hit) = common::hits(&pool, "hit").await;
    assert_eq!(hits, 3);
    assert!(last_hit.unwrap() >= first_hit);
}

#[tokio::test]
async fn test_last_hit_never_moves_backwards() {
    let pool = common::memory_pool().await;
    common::insert_url(&pool, "future", "https://example.com").await;

    let far_future = chrono::Utc::now().timestamp() + 86_400;
    sqlx::query("UPDATE Urls SET last_hit = ? WHERE code = 'future'")
        .bind(far_future)
        .execute(&pool)
        .await
        .unwrap();

    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));
    repo.lookup_url("future").await.unwrap();

    assert_eq!(common::hits(&pool, "future").await, (1, Some(far_future)));
}

#[tokio::test]
async fn test_lookup_missing_code() {
    let pool = common::memory_pool().await;
    common::insert_url(&pool, "present", "https://example.com").await;
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    let result = repo.lookup_url("absent").await;
    assert!(matches!(result, Err(ShortenError::NotFound)));

    assert_eq!(common::hits(&pool, "present").await, (0, None));
    assert!(repo.find_by_code("absent").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_code_does_not_count() {
    let pool = common::memory_pool().await;
    common::insert_url(&pool, "quiet", "https://example.com").await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let record = repo.find_by_code("quiet").await.unwrap().unwrap();
    assert!(record.is_unvisited());

    let record = repo.find_by_code("quiet").await.unwrap().unwrap();
    assert_eq!(record.hits, 0);
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let pool = common::memory_pool().await;
    common::insert_url(&pool, "keep", "https://example.com").await;

    shorten::infrastructure::persistence::init_schema(&pool)
        .await
        .unwrap();
    shorten::infrastructure::persistence::init_schema(&pool)
        .await
        .unwrap();

    let repo = SqliteUrlRepository::new(Arc::new(pool));
    assert!(repo.find_by_code("keep").await.unwrap().is_some());
}
