//! # Shorten
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Code allocation and credential services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers and middleware
//!
//! ## Guarantees
//!
//! - A short code is bound at most once. Concurrent creates racing on the
//!   same code are decided by the database's primary-key constraint, never
//!   by a check in application code.
//! - Generated codes use a 62-symbol alphabet drawn from the OS CSPRNG.
//! - Each successful lookup counts one hit and refreshes the last-hit time.
//! - Passwords are stored as a fresh 16-byte salt plus SHA3-512 hash.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! cargo run -- --listen-port 8080 --url-prefix http://localhost:8080/
//!
//! # Shorten a URL
//! curl -d 'https://example.com/page' http://localhost:8080/
//!
//! # Shorten with a custom code
//! curl -d 'https://example.com/page' http://localhost:8080/my-code
//!
//! # Manage credentials used by --auth
//! cargo run --bin shortenpw -- urls.db create alice
//! ```
//!
//! ## Configuration
//!
//! See [`config::Config`] for available flags and environment variables.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ShortenError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::{Credential, NewUrl, UrlRecord};
    pub use crate::error::{AppError, ShortenError};
    pub use crate::state::AppState;
}
