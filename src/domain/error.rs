//! Store-level error kinds.

use thiserror::Error;

/// Boxed error type carried by [`StorageError::Backend`].
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a URL store operation.
///
/// Handlers match on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already mapped to a destination.
    #[error("alias already exists")]
    AliasExists,

    /// No mapping exists for the alias.
    #[error("alias not found")]
    AliasNotFound,

    /// Any other failure of the storage engine.
    #[error("storage backend failure: {0}")]
    Backend(#[source] BackendError),
}

impl StorageError {
    /// Wraps an arbitrary engine error as [`StorageError::Backend`].
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}
