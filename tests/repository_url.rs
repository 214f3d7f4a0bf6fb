mod common;

use alias_shortener::domain::StorageError;
use alias_shortener::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
use alias_shortener::infrastructure::persistence::{SqliteUrlRepository, StoreOptions};

#[tokio::test]
async fn test_save_and_get_url() {
    let repo = common::create_test_repository().await;

    repo.save_url("https://example.com", "abc123").await.unwrap();

    let url = repo.get_url("abc123").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[tokio::test]
async fn test_save_duplicate_alias_conflicts() {
    let repo = common::create_test_repository().await;

    repo.save_url("https://first.com", "taken").await.unwrap();
    let result = repo.save_url("https://second.com", "taken").await;

    assert!(matches!(result, Err(StorageError::AliasExists)));
    assert_eq!(repo.get_url("taken").await.unwrap(), "https://first.com");
    assert_eq!(common::count_mappings(&repo).await, 1);
}

#[tokio::test]
async fn test_same_destination_under_many_aliases() {
    let repo = common::create_test_repository().await;

    repo.save_url("https://example.com", "one").await.unwrap();
    repo.save_url("https://example.com", "two").await.unwrap();

    assert_eq!(repo.get_url("one").await.unwrap(), "https://example.com");
    assert_eq!(repo.get_url("two").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_get_url_not_found() {
    let repo = common::create_test_repository().await;

    let result = repo.get_url("missing").await;

    assert!(matches!(result, Err(StorageError::AliasNotFound)));
}

#[tokio::test]
async fn test_delete_then_get_not_found() {
    let repo = common::create_test_repository().await;
    common::insert_mapping(&repo, "gone", "https://example.com").await;

    repo.delete_url("gone").await.unwrap();

    assert!(matches!(
        repo.get_url("gone").await,
        Err(StorageError::AliasNotFound)
    ));
}

#[tokio::test]
async fn test_delete_missing_alias_is_not_found() {
    let repo = common::create_test_repository().await;

    let result = repo.delete_url("missing").await;

    assert!(matches!(result, Err(StorageError::AliasNotFound)));
}

#[tokio::test]
async fn test_delete_twice() {
    let repo = common::create_test_repository().await;
    common::insert_mapping(&repo, "once", "https://example.com").await;

    assert!(repo.delete_url("once").await.is_ok());
    assert!(matches!(
        repo.delete_url("once").await,
        Err(StorageError::AliasNotFound)
    ));
}

#[tokio::test]
async fn test_alias_can_be_reused_after_delete() {
    let repo = common::create_test_repository().await;

    repo.save_url("https://old.com", "reuse").await.unwrap();
    repo.delete_url("reuse").await.unwrap();
    repo.save_url("https://new.com", "reuse").await.unwrap();

    assert_eq!(repo.get_url("reuse").await.unwrap(), "https://new.com");
}

#[tokio::test]
async fn test_aliases_are_case_sensitive() {
    let repo = common::create_test_repository().await;

    repo.save_url("https://lower.com", "abc").await.unwrap();
    repo.save_url("https://upper.com", "ABC").await.unwrap();

    assert_eq!(repo.get_url("abc").await.unwrap(), "https://lower.com");
    assert_eq!(repo.get_url("ABC").await.unwrap(), "https://upper.com");
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let repo = common::create_test_repository().await;

    for (alias, url) in [
        ("first", "https://1.com"),
        ("second", "https://2.com"),
        ("third", "https://3.com"),
    ] {
        repo.save_url(url, alias).await.unwrap();
    }

    let all = repo.list(10, 0).await.unwrap();
    let aliases: Vec<_> = all.iter().map(|m| m.alias.as_str()).collect();
    assert_eq!(aliases, ["first", "second", "third"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let page = repo.list(1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].alias, "second");
    assert_eq!(page[0].url, "https://2.com");

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_open_file_store_twice_keeps_data() {
    let path = common::temp_db_path();

    {
        let repo = SqliteUrlRepository::connect(&path, StoreOptions::default())
            .await
            .unwrap();
        repo.save_url("https://example.com", "persist").await.unwrap();
        repo.pool().close().await;
    }

    let reopened = SqliteUrlRepository::connect(&path, StoreOptions::default())
        .await
        .unwrap();

    assert_eq!(
        reopened.get_url("persist").await.unwrap(),
        "https://example.com"
    );

    reopened.pool().close().await;
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_open_file_with_existing_urls_table() {
    let path = common::temp_db_path();

    // A table created by an earlier deployment, before migrations were tracked
    {
        let options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let pool = sqlx::SqlitePool::connect_with(options).await.unwrap();
        sqlx::query(
            "CREATE TABLE urls (id INTEGER PRIMARY KEY AUTOINCREMENT, alias TEXT NOT NULL UNIQUE, url TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO urls (url, alias) VALUES ('https://legacy.com', 'legacy')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;
    }

    let repo = SqliteUrlRepository::connect(&path, StoreOptions::default())
        .await
        .unwrap();

    assert_eq!(repo.get_url("legacy").await.unwrap(), "https://legacy.com");
    assert!(matches!(
        repo.save_url("https://other.com", "legacy").await,
        Err(StorageError::AliasExists)
    ));

    repo.pool().close().await;
    let _ = std::fs::remove_file(&path);
}
