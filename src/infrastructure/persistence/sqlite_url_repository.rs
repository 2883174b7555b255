//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::{ShortenError, map_unique_violation};

type UrlRow = (String, String, i64, String, i64, Option<i64>);

/// SQLite repository for code to URL bindings.
///
/// Collisions are detected by the `code` primary key, so concurrent inserts
/// of the same code resolve to exactly one success.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create_url(&self, new_url: NewUrl) -> Result<(), ShortenError> {
        sqlx::query(
            r#"
            INSERT INTO Urls (code, url, created_at, created_by, hits, last_hit)
            VALUES (?, ?, ?, ?, 0, NULL)
            "#,
        )
        .bind(new_url.code)
        .bind(new_url.url)
        .bind(Utc::now().timestamp())
        .bind(new_url.created_by)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_unique_violation(e, ShortenError::DuplicateCode))?;

        Ok(())
    }

    async fn lookup_url(&self, code: &str) -> Result<String, ShortenError> {
        // One statement: the read and the counter bump cannot interleave with
        // another lookup, and a missing code touches no row.
        let url: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE Urls
            SET hits = hits + 1,
                last_hit = MAX(COALESCE(last_hit, 0), ?)
            WHERE code = ?
            RETURNING url
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        url.ok_or(ShortenError::NotFound)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, ShortenError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT code, url, created_at, created_by, hits, last_hit
            FROM Urls
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(
            |(code, url, created_at, created_by, hits, last_hit)| UrlRecord {
                code,
                url,
                created_at,
                created_by,
                hits,
                last_hit,
            },
        ))
    }
}
