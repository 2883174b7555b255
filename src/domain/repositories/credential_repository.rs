//! Repository trait for administrative credentials.

use crate::domain::entities::Credential;
use crate::error::ShortenError;
use async_trait::async_trait;

/// Repository interface for the credential table.
///
/// Stores only salts and hashes; plaintext passwords never reach this layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCredentialRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Inserts a new credential.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::DuplicateUsername`] if the username is taken.
    /// Returns [`ShortenError::Storage`] on other database errors.
    async fn create_user(&self, credential: Credential) -> Result<(), ShortenError>;

    /// Fetches the stored salt and hash for a username.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    /// Returns [`ShortenError::CorruptCredential`] if the stored values do not decode.
    async fn get_credential(&self, username: &str) -> Result<Credential, ShortenError>;

    /// Replaces salt and hash together for an existing username.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    async fn update_credential(&self, credential: Credential) -> Result<(), ShortenError>;

    /// Removes a username.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    async fn delete_user(&self, username: &str) -> Result<(), ShortenError>;
}
