//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlMapping;
use crate::domain::error::StorageError;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool settings for a file-backed store.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// SQLite repository for alias → URL mappings.
///
/// Every operation is a single bound statement against the `urls` table; there is
/// no cache in front of it. Alias uniqueness is enforced by the table's `UNIQUE`
/// constraint.
#[derive(Clone)]
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Opens (creating if missing) the database file at `path` and applies the schema.
    ///
    /// Safe to call against a fresh or an already initialized file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the file cannot be opened or the
    /// schema cannot be applied.
    pub async fn connect(
        path: impl AsRef<Path>,
        options: StoreOptions,
    ) -> Result<Self, StorageError> {
        let connect_options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .busy_timeout(options.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect_options)
            .await
            .map_err(StorageError::backend)?;

        Self::with_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// The pool is pinned to a single never-expiring connection, since every
    /// SQLite in-memory connection is a separate database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let connect_options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(StorageError::backend)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(StorageError::backend)?;

        Self::with_pool(pool).await
    }

    /// Wraps an existing pool, applying the schema first.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        MIGRATOR.run(&pool).await.map_err(StorageError::backend)?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }

    /// Lists mappings in insertion order.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, StorageError> {
        let rows: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM urls ORDER BY id LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(self.pool.as_ref())
                .await
                .map_err(StorageError::backend)?;

        Ok(rows
            .into_iter()
            .map(|(id, alias, url)| UrlMapping::new(id, alias, url))
            .collect())
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, StorageError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(StorageError::backend)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, url_to_save: &str, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("INSERT INTO urls (url, alias) VALUES (?, ?)")
            .bind(url_to_save)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::AliasExists),
            Err(e) => Err(StorageError::backend(e)),
        }
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(StorageError::backend)?
            .ok_or(StorageError::AliasNotFound)
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(StorageError::backend)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::AliasNotFound);
        }

        Ok(())
    }
}
