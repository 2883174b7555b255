//! Repository trait for short code bindings.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::ShortenError;
use async_trait::async_trait;

/// Repository interface for code to URL bindings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Atomically inserts a new binding with `hits = 0` and no last hit.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::DuplicateCode`] if the storage engine rejects
    /// the code as already present.
    ///
    /// Returns [`ShortenError::Storage`] on any other database error.
    async fn create_url(&self, new_url: NewUrl) -> Result<(), ShortenError>;

    /// Resolves a code to its URL, counting the hit.
    ///
    /// A successful lookup increments `hits` and refreshes `last_hit`.
    /// A failed lookup changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the code is not bound.
    /// Returns [`ShortenError::Storage`] on database errors.
    async fn lookup_url(&self, code: &str) -> Result<String, ShortenError>;

    /// Reads a full record without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, ShortenError>;
}
