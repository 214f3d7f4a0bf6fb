mod common;

use alias_shortener::api::handlers::{delete_handler, missing_alias_handler};
use alias_shortener::domain::StorageError;
use alias_shortener::domain::repositories::UrlGetter;
use axum::{Router, http::StatusCode, routing::delete};
use axum_test::TestServer;
use serde_json::json;

async fn setup() -> (
    TestServer,
    std::sync::Arc<alias_shortener::infrastructure::persistence::SqliteUrlRepository>,
) {
    let repo = common::create_test_repository().await;
    let app = Router::new()
        .route("/url", delete(missing_alias_handler))
        .route("/url/{alias}", delete(delete_handler))
        .with_state(common::create_test_state(repo.clone()));

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_delete_success() {
    let (server, repo) = setup().await;
    common::insert_mapping(&repo, "abc123", "https://example.com").await;

    let response = server.delete("/url/abc123").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK" }));
    assert!(matches!(
        repo.get_url("abc123").await,
        Err(StorageError::AliasNotFound)
    ));
}

#[tokio::test]
async fn test_delete_not_found() {
    let (server, _repo) = setup().await;

    let response = server.delete("/url/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "status": "Error", "error": "url not found" }));
}

#[tokio::test]
async fn test_delete_only_removes_target() {
    let (server, repo) = setup().await;
    common::insert_mapping(&repo, "keep", "https://keep.com").await;
    common::insert_mapping(&repo, "drop", "https://drop.com").await;

    server.delete("/url/drop").await.assert_status_ok();

    assert_eq!(repo.get_url("keep").await.unwrap(), "https://keep.com");
    assert_eq!(common::count_mappings(&repo).await, 1);
}

#[tokio::test]
async fn test_delete_without_alias() {
    let (server, _repo) = setup().await;

    let response = server.delete("/url").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "status": "Error", "error": "alias is required" }));
}
