//! Capability traits for URL store access.
//!
//! Each HTTP handler depends on the narrowest capability it needs, so it can be
//! exercised against a test double without a real storage backend.
//!
//! # Available Capabilities
//!
//! - [`UrlSaver`] - Create a mapping
//! - [`UrlGetter`] - Resolve an alias
//! - [`UrlDeleter`] - Remove a mapping
//!
//! All three are implemented by
//! [`crate::infrastructure::persistence::SqliteUrlRepository`].
//! Mock implementations are generated via `mockall` for unit tests.

pub mod url_repository;

pub use url_repository::{UrlDeleter, UrlGetter, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockUrlDeleter, MockUrlGetter, MockUrlSaver};
