//! Panic recovery for request handlers.

use axum::response::{IntoResponse, Response};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::error::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a handler panic into `500 {"status":"Error","error":"internal error"}`.
///
/// Must sit inside the trace layer so the panic is logged in the request span.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = message, "handler panicked");

    AppError::internal("internal error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::json;

    async fn boom() -> &'static str {
        panic!("boom")
    }

    async fn fine() -> &'static str {
        "fine"
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/boom", get(boom))
            .route("/fine", get(fine))
            .layer(layer())
            .layer(crate::api::middleware::tracing::layer());

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let server = server();

        let response = server.get("/boom").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
    }

    #[tokio::test]
    async fn test_server_keeps_serving_after_panic() {
        let server = server();

        server
            .get("/boom")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let response = server.get("/fine").await;
        response.assert_status_ok();
        response.assert_text("fine");
    }
}
