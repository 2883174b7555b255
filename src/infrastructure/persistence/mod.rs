//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Code bindings and hit counting
//! - [`SqliteCredentialRepository`] - Administrative credentials
//!
//! [`schema`] holds the idempotent DDL and pool construction.

pub mod schema;
pub mod sqlite_credential_repository;
pub mod sqlite_url_repository;

pub use schema::{connect, init_schema};
pub use sqlite_credential_repository::SqliteCredentialRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
