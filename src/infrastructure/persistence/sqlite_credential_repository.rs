//! SQLite implementation of the credential repository.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Credential;
use crate::domain::repositories::CredentialRepository;
use crate::error::{ShortenError, map_unique_violation};

/// SQLite repository for administrative credentials.
///
/// Salt and hash are stored as padded standard base64 text.
pub struct SqliteCredentialRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCredentialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for SqliteCredentialRepository {
    async fn create_user(&self, credential: Credential) -> Result<(), ShortenError> {
        sqlx::query(
            r#"
            INSERT INTO Users (username, salt, password_hash)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(credential.username)
        .bind(STANDARD.encode(&credential.salt))
        .bind(STANDARD.encode(&credential.password_hash))
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| map_unique_violation(e, ShortenError::DuplicateUsername))?;

        Ok(())
    }

    async fn get_credential(&self, username: &str) -> Result<Credential, ShortenError> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT salt, password_hash
            FROM Users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let (salt, password_hash) = row.ok_or(ShortenError::NotFound)?;

        Ok(Credential {
            username: username.to_string(),
            salt: STANDARD.decode(salt)?,
            password_hash: STANDARD.decode(password_hash)?,
        })
    }

    async fn update_credential(&self, credential: Credential) -> Result<(), ShortenError> {
        let result = sqlx::query(
            r#"
            UPDATE Users
            SET salt = ?, password_hash = ?
            WHERE username = ?
            "#,
        )
        .bind(STANDARD.encode(&credential.salt))
        .bind(STANDARD.encode(&credential.password_hash))
        .bind(credential.username)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(ShortenError::NotFound);
        }

        Ok(())
    }

    async fn delete_user(&self, username: &str) -> Result<(), ShortenError> {
        let result = sqlx::query("DELETE FROM Users WHERE username = ?")
            .bind(username)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(ShortenError::NotFound);
        }

        Ok(())
    }
}
