//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Redirect to the stored URL (public)
//! - `POST   /url`           - Save a URL (basic auth)
//! - `DELETE /url`           - Fixed `400 alias is required` (basic auth)
//! - `DELETE /url/{alias}`   - Delete a mapping (basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Recovery** - `500` when a handler panics
//! - **Timeout** - `408` once a request exceeds the configured timeout
//! - **Authentication** - Basic auth on `/url` routes

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, recover, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization is applied by the server around this router.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.credentials.clone(), auth::layer),
    );

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .merge(api_router)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(recover::layer())
        .layer(tracing::layer())
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::set_request_id_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BasicCredentials;
    use crate::domain::StorageError;
    use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
    use async_trait::async_trait;
    use axum::http::HeaderName;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    /// Store whose lookups either never finish or panic.
    struct FaultyStore {
        hang: bool,
    }

    #[async_trait]
    impl UrlSaver for FaultyStore {
        async fn save_url(&self, _url: &str, _alias: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UrlGetter for FaultyStore {
        async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
            if self.hang {
                return std::future::pending().await;
            }
            panic!("lookup of {alias} blew up");
        }
    }

    #[async_trait]
    impl UrlDeleter for FaultyStore {
        async fn delete_url(&self, _alias: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn server(hang: bool, timeout: Duration) -> TestServer {
        let state = AppState::new(
            Arc::new(FaultyStore { hang }),
            BasicCredentials::new("myuser", "mypass"),
        );

        TestServer::new(app_router(state, timeout)).unwrap()
    }

    #[tokio::test]
    async fn test_handler_panic_returns_internal_error() {
        let server = server(false, Duration::from_secs(5));

        let response = server.get("/abc123").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
        assert!(!response.header(HeaderName::from_static(tracing::REQUEST_ID_HEADER)).is_empty());
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let server = server(true, Duration::from_millis(50));

        let response = server.get("/abc123").await;

        response.assert_status(StatusCode::REQUEST_TIMEOUT);
    }
}
