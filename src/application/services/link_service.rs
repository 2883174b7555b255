//! Code allocation and lookup service.

use std::sync::Arc;

use crate::domain::entities::NewUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::ShortenError;
use crate::utils::code_generator::{generate_code, validate_custom_code};

/// Number of generated candidates tried before giving up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 3;

/// Service binding URLs to short codes and resolving them back.
///
/// Uniqueness is decided by the repository's atomic insert; this service
/// never checks for an existing code before inserting.
pub struct LinkService<L: UrlRepository> {
    url_repository: Arc<L>,
    code_length: usize,
}

impl<L: UrlRepository> LinkService<L> {
    /// Creates a new link service generating codes of `code_length` symbols.
    pub fn new(url_repository: Arc<L>, code_length: usize) -> Self {
        Self {
            url_repository,
            code_length,
        }
    }

    /// Binds `url` to a code and returns the code.
    ///
    /// The URL must already have been validated by the caller.
    ///
    /// # Code Selection
    ///
    /// - With `custom_code`: validates its syntax and makes exactly one insert
    ///   attempt. A taken code is reported, not retried.
    /// - Without: generates up to [`MAX_ALLOCATION_ATTEMPTS`] candidates,
    ///   discarding each one that collides or fails to persist.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidCode`] if the custom code has invalid syntax
    /// - [`ShortenError::CodeConflict`] if the custom code is already bound
    /// - [`ShortenError::AllocationExhausted`] if every generated candidate failed
    /// - [`ShortenError::RandomSource`] if the entropy source fails
    /// - [`ShortenError::Storage`] if inserting a custom code hits a database error
    pub async fn create_short_link(
        &self,
        url: &str,
        custom_code: Option<&str>,
        created_by: &str,
    ) -> Result<String, ShortenError> {
        match custom_code {
            Some(code) => self.bind_custom_code(url, code, created_by).await,
            None => self.bind_generated_code(url, created_by).await,
        }
    }

    /// Resolves a code to its URL and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::NotFound`] if the code is not bound.
    pub async fn lookup(&self, code: &str) -> Result<String, ShortenError> {
        self.url_repository.lookup_url(code).await
    }

    /// Joins a URL prefix and a code into the public short URL.
    pub fn short_url(&self, prefix: &str, code: &str) -> String {
        format!("{prefix}{code}")
    }

    async fn bind_custom_code(
        &self,
        url: &str,
        code: &str,
        created_by: &str,
    ) -> Result<String, ShortenError> {
        validate_custom_code(code)?;

        match self
            .url_repository
            .create_url(NewUrl::new(code, url, created_by))
            .await
        {
            Ok(()) => Ok(code.to_string()),
            Err(ShortenError::DuplicateCode) => Err(ShortenError::CodeConflict),
            Err(e) => Err(e),
        }
    }

    async fn bind_generated_code(
        &self,
        url: &str,
        created_by: &str,
    ) -> Result<String, ShortenError> {
        let mut last_error = None;

        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            let code = generate_code(self.code_length)?;

            match self
                .url_repository
                .create_url(NewUrl::new(code.as_str(), url, created_by))
                .await
            {
                Ok(()) => return Ok(code),
                Err(e) => last_error = Some(Box::new(e)),
            }
        }

        Err(ShortenError::AllocationExhausted {
            attempts: MAX_ALLOCATION_ATTEMPTS,
            last: last_error,
        })
    }
}
