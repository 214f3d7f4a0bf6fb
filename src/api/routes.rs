//! API route configuration.

use crate::api::handlers::{delete_handler, missing_alias_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// URL management routes, to be protected by basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under a given or generated alias
/// - `DELETE /url`          - Always `400 alias is required`
/// - `DELETE /url/{alias}`  - Remove a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler).delete(missing_alias_handler))
        .route("/url/{alias}", delete(delete_handler))
}
