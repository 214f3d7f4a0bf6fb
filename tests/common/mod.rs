#![allow(dead_code)]

use alias_shortener::config::BasicCredentials;
use alias_shortener::infrastructure::persistence::SqliteUrlRepository;
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::generate_alias;
use axum::Router;
use axum::http::{HeaderName, HeaderValue, header};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_USER: &str = "myuser";
pub const TEST_PASSWORD: &str = "mypass";

/// `Authorization` header for `myuser:mypass`.
pub fn basic_auth() -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic bXl1c2VyOm15cGFzcw=="),
    )
}

/// `Authorization` header for `myuser:wrong`.
pub fn wrong_basic_auth() -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic bXl1c2VyOndyb25n"),
    )
}

pub async fn create_test_repository() -> Arc<SqliteUrlRepository> {
    Arc::new(SqliteUrlRepository::in_memory().await.unwrap())
}

pub fn create_test_state(repo: Arc<SqliteUrlRepository>) -> AppState {
    AppState::new(repo, BasicCredentials::new(TEST_USER, TEST_PASSWORD))
}

/// Full application router backed by `repo`.
pub fn create_test_app(repo: Arc<SqliteUrlRepository>) -> Router {
    app_router(create_test_state(repo), Duration::from_secs(5))
}

pub async fn insert_mapping(repo: &SqliteUrlRepository, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(repo.pool())
        .await
        .unwrap();
}

pub async fn count_mappings(repo: &SqliteUrlRepository) -> i64 {
    repo.count().await.unwrap()
}

/// Unique database file path under the system temp directory.
pub fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("alias-shortener-{}.db", generate_alias(16)))
}
