//! Store capabilities used by the save, redirect and delete handlers.

use crate::domain::error::StorageError;
use async_trait::async_trait;

/// Persists new alias → URL mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a mapping from `alias` to `url_to_save`.
    ///
    /// Uniqueness is enforced by a single atomic insert, not a prior lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already taken; the
    /// existing mapping is left untouched.
    /// Returns [`StorageError::Backend`] on any other storage failure.
    async fn save_url(&self, url_to_save: &str, alias: &str) -> Result<(), StorageError>;
}

/// Resolves aliases to their destination URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the destination stored for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasNotFound`] if no mapping exists.
    /// Returns [`StorageError::Backend`] on storage failures.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes mappings by alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasNotFound`] if nothing was deleted.
    /// Returns [`StorageError::Backend`] on storage failures.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}
