//! SQLite repository implementations.
//!
//! Concrete implementations of the domain store capabilities using SQLx.
//! The schema is applied from the embedded `migrations/` directory every time a
//! repository is opened.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias → URL mapping storage

pub mod sqlite_url_repository;

pub use sqlite_url_repository::{SqliteUrlRepository, StoreOptions};
