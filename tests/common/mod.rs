#![allow(dead_code)]

use axum_test::TestServer;
use shorten::application::services::AuthService;
use shorten::infrastructure::persistence::{SqliteCredentialRepository, connect, init_schema};
use shorten::routes::app_router;
use shorten::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tempfile::TempDir;

pub const URL_PREFIX: &str = "http://s.test/";

/// Single-connection in-memory database with the schema applied.
///
/// The connection is never recycled, since dropping it drops the database.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    init_schema(&pool).await.unwrap();
    pool
}

/// File-backed database for tests that need several real connections.
pub async fn file_pool(dir: &TempDir, max_connections: u32) -> SqlitePool {
    let path = dir.path().join("urls.db");
    let pool = connect(path.to_str().unwrap(), max_connections)
        .await
        .unwrap();

    init_schema(&pool).await.unwrap();
    pool
}

pub async fn insert_url(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO Urls (code, url, created_at, created_by, hits, last_hit) VALUES (?, ?, 0, 'test', 0, NULL)",
    )
    .bind(code)
    .bind(url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn hits(pool: &SqlitePool, code: &str) -> (i64, Option<i64>) {
    sqlx::query_as("SELECT hits, last_hit FROM Urls WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) {
    let service = AuthService::new(Arc::new(SqliteCredentialRepository::new(Arc::new(
        pool.clone(),
    ))));
    service.create_user(username, password).await.unwrap();
}

pub fn create_test_state(pool: SqlitePool, require_auth: bool) -> AppState {
    AppState::new(Arc::new(pool), 6, URL_PREFIX, None, require_auth)
}

pub fn test_server(pool: SqlitePool, require_auth: bool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool, require_auth))).unwrap()
}

/// Extracts the code from a create response body.
pub fn code_from_body(body: &str) -> String {
    body.trim_end()
        .strip_prefix(URL_PREFIX)
        .expect("short URL carries the configured prefix")
        .to_string()
}
