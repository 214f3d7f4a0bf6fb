//! Domain layer containing the URL mapping entity and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Capability traits consumed by HTTP handlers
//! - [`error`] - Store-level failure kinds
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Capability traits are implemented by [`crate::infrastructure::persistence`].

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StorageError;
