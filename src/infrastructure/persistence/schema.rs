//! Schema creation and connection pool setup.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::time::Duration;

use crate::error::ShortenError;

/// DDL for both tables. Every statement is safe to re-run.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Users(
    username      TEXT PRIMARY KEY,
    salt          TEXT NOT NULL,
    password_hash TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Urls(
    code       TEXT PRIMARY KEY,
    url        TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    created_by TEXT NOT NULL,
    hits       INTEGER NOT NULL,
    last_hit   INTEGER
);
"#;

/// How long a writer waits on the database lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if missing) the SQLite database at `path`.
///
/// The pool runs in WAL mode with a busy timeout so concurrent writers
/// queue on the engine's lock instead of failing immediately.
///
/// # Errors
///
/// Returns [`ShortenError::Storage`] if the database cannot be opened.
pub async fn connect(path: &str, max_connections: u32) -> Result<SqlitePool, ShortenError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Creates both tables if they do not exist yet.
///
/// # Errors
///
/// Returns [`ShortenError::Storage`] if any statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), ShortenError> {
    // sqlx::query runs one statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        sqlx::query(stmt).execute(pool).await?;
    }

    tracing::debug!("Schema initialized");
    Ok(())
}
