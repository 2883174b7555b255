//! Credential lifecycle service for administrative accounts.

use std::sync::Arc;

use crate::domain::entities::Credential;
use crate::domain::repositories::CredentialRepository;
use crate::error::ShortenError;
use crate::utils::password::{hash_password, verify_password};

/// Service for creating, checking, updating and deleting credentials.
///
/// Passwords are hashed with a fresh salt on every create and update.
/// Plaintext passwords are neither stored nor logged.
pub struct AuthService<R: CredentialRepository> {
    repository: Arc<R>,
}

impl<R: CredentialRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::DuplicateUsername`] if the username exists.
    /// Returns [`ShortenError::RandomSource`] if no salt can be generated.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), ShortenError> {
        let credential = Credential::new(username, hash_password(password)?);
        self.repository.create_user(credential).await
    }

    /// Checks a password against the stored credential.
    ///
    /// Returns `Ok(false)` for a wrong password.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    pub async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, ShortenError> {
        let credential = self.repository.get_credential(username).await?;

        Ok(verify_password(
            password,
            &credential.salt,
            &credential.password_hash,
        ))
    }

    /// Replaces the password, salt included.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    pub async fn update_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), ShortenError> {
        let credential = Credential::new(username, hash_password(password)?);
        self.repository.update_credential(credential).await
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the username does not exist.
    pub async fn delete_user(&self, username: &str) -> Result<(), ShortenError> {
        self.repository.delete_user(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCredentialRepository;
    use crate::utils::password::SALT_SIZE;

    fn stored(username: &str, password: &str) -> Credential {
        Credential::new(username, hash_password(password).unwrap())
    }

    #[tokio::test]
    async fn test_create_user_stores_hash_not_password() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_create_user()
            .withf(|c| {
                c.username == "alice"
                    && c.salt.len() == SALT_SIZE
                    && c.password_hash.len() == 64
                    && verify_password("secret1", &c.salt, &c.password_hash)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo));

        assert!(service.create_user("alice", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_duplicate() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_create_user()
            .times(1)
            .returning(|_| Err(ShortenError::DuplicateUsername));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.create_user("alice", "secret1").await;
        assert!(matches!(result, Err(ShortenError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_check_credentials() {
        let credential = stored("alice", "secret1");

        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_get_credential()
            .withf(|username| username == "alice")
            .times(2)
            .returning(move |_| Ok(credential.clone()));
        mock_repo
            .expect_get_credential()
            .withf(|username| username == "bob")
            .times(1)
            .returning(|_| Err(ShortenError::NotFound));

        let service = AuthService::new(Arc::new(mock_repo));

        assert!(service.check_credentials("alice", "secret1").await.unwrap());
        assert!(!service.check_credentials("alice", "wrong").await.unwrap());
        assert!(matches!(
            service.check_credentials("bob", "anything").await,
            Err(ShortenError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_salt_and_hash_together() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_update_credential()
            .withf(|c| {
                c.username == "alice" && verify_password("secret2", &c.salt, &c.password_hash)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo));

        assert!(service.update_credentials("alice", "secret2").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_update_credential()
            .times(1)
            .returning(|_| Err(ShortenError::NotFound));

        let service = AuthService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.update_credentials("ghost", "pw").await,
            Err(ShortenError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut mock_repo = MockCredentialRepository::new();
        mock_repo
            .expect_delete_user()
            .withf(|username| username == "alice")
            .times(1)
            .returning(|_| Ok(()));
        mock_repo
            .expect_delete_user()
            .withf(|username| username == "ghost")
            .times(1)
            .returning(|_| Err(ShortenError::NotFound));

        let service = AuthService::new(Arc::new(mock_repo));

        assert!(service.delete_user("alice").await.is_ok());
        assert!(matches!(
            service.delete_user("ghost").await,
            Err(ShortenError::NotFound)
        ));
    }
}
