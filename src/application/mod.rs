//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations the HTTP
//! boundary and the operator tool call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code allocation and lookup
//! - [`services::auth_service::AuthService`] - Credential lifecycle

pub mod services;
