//! HTTP boundary translating requests into core operations.
//!
//! This layer is thin: it validates request syntax, calls the
//! services, maps typed failures to status codes, and logs outcomes.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing
pub mod handlers;
pub mod middleware;
