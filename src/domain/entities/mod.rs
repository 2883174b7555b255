//! Core domain entities representing the persisted data model.
//!
//! Entities are plain data structures without storage logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A short code bound to a destination URL
//! - [`Credential`] - An administrative account's salted password hash
//!
//! Creation inputs use a separate struct ([`NewUrl`]) carrying only the
//! fields the caller controls.

pub mod credential;
pub mod url_record;

pub use credential::Credential;
pub use url_record::{NewUrl, UrlRecord};
