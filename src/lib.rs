//! # Alias Shortener
//!
//! A small URL shortening service built with Axum and SQLite: store a long URL under
//! a chosen or generated alias, redirect visitors from the alias, delete mappings.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL mapping entity, store capabilities and errors
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="myuser"
//! export HTTP_PASSWORD="mypass"
//!
//! cargo run
//!
//! curl -u myuser:mypass -d '{"url":"https://example.com","alias":"abc123"}' \
//!     -H 'content-type: application/json' http://localhost:8082/url
//! curl -i http://localhost:8082/abc123
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::StorageError;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
