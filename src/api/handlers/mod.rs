//! HTTP request handlers.
//!
//! Handlers validate request syntax, delegate to the services in
//! [`crate::application::services`], and log one line per outcome.

pub mod homepage;
pub mod redirect;
pub mod shorten;

pub use homepage::{homepage_handler, method_not_allowed_handler};
pub use redirect::redirect_handler;
pub use shorten::{shorten_custom_handler, shorten_handler};
