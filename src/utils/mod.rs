//! Utility functions for code generation, hashing, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`password`] - Salted password hashing and verification
//! - [`url_validator`] - Destination URL validation
//! - [`client_host`] - Client host extraction from HTTP requests

pub mod client_host;
pub mod code_generator;
pub mod password;
pub mod url_validator;
