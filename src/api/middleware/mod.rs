//! HTTP middleware.
//!
//! - [`auth`] - Basic authentication for code creation
//! - [`tracing`] - Request spans and latency logging

pub mod auth;
pub mod tracing;
