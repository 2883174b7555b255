//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two persisted tables. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Code to URL bindings with hit counting
//! - [`CredentialRepository`] - Administrative credentials
//!
//! # Uniqueness
//!
//! Both tables rely on the storage engine's primary-key constraint to reject
//! duplicates. Implementations must attempt the insert and translate the
//! constraint violation, never check for existence first.
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod credential_repository;
pub mod url_repository;

pub use credential_repository::CredentialRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
