//! Domain layer containing entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers.
//! Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
