//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="local"
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="myuser"
//! export HTTP_PASSWORD="mypass"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth credentials for `/url` routes
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `RUST_LOG` - Log filter (default depends on `APP_ENV`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::StoreOptions;

/// Deployment environment; selects log format and default verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn default_log_level(self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    /// Whether logs are emitted as JSON instead of human-readable text.
    pub fn json_logs(self) -> bool {
        !matches!(self, AppEnv::Local)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{other}'"),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single username/password pair accepted by basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns true if the supplied pair matches exactly.
    ///
    /// Both fields are compared as SHA-256 digests in constant time.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = digest_eq(&self.username, username);
        let pass_ok = digest_eq(&self.password, password);
        user_ok & pass_ok
    }
}

fn digest_eq(expected: &str, supplied: &str) -> bool {
    let expected = Sha256::digest(expected.as_bytes());
    let supplied = Sha256::digest(supplied.as_bytes());

    expected
        .iter()
        .zip(supplied.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    /// Per-request timeout in seconds; requests exceeding it get `408`.
    pub http_timeout: u64,
    pub credentials: BasicCredentials,
    pub db_max_connections: u32,
    /// How long SQLite waits on a locked database before failing, in seconds.
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<AppEnv>()?;

        let storage_path = load_storage_path()?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());

        let http_timeout = parse_or("HTTP_TIMEOUT", 4);

        let username = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 5);
        let db_busy_timeout = parse_or("DB_BUSY_TIMEOUT", 5);

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            log_level,
            http_timeout,
            credentials: BasicCredentials::new(username, password),
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` has no port
    /// - `http_timeout` or `db_busy_timeout` is zero
    /// - either credential is empty
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.credentials.username.is_empty() {
            anyhow::bail!("HTTP_USER must not be empty");
        }
        if self.credentials.password.is_empty() {
            anyhow::bail!("HTTP_PASSWORD must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary (without the password).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Basic auth user: {}", self.credentials.username);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

/// Reads `STORAGE_PATH`.
///
/// Shared with the admin CLI, which needs the store but not the HTTP settings.
pub fn load_storage_path() -> Result<String> {
    env::var("STORAGE_PATH").context("STORAGE_PATH must be set")
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
