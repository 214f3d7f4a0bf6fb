//! Handlers for the delete endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::api::dto::response::StatusResponse;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlDeleter;
use crate::error::AppError;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Response
///
/// ```json
/// { "status": "OK" }
/// ```
///
/// # Errors
///
/// - 400 if the alias is empty
/// - 404 if nothing was stored under the alias
/// - 500 on storage failures
#[instrument(name = "handlers.url.delete", skip_all, fields(alias = %alias))]
pub async fn delete_handler(
    State(deleter): State<Arc<dyn UrlDeleter>>,
    Path(alias): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::bad_request("invalid request"));
    }

    match deleter.delete_url(&alias).await {
        Ok(()) => {
            info!("url deleted");
            Ok(Json(StatusResponse::ok()))
        }
        Err(StorageError::AliasNotFound) => {
            info!("url not found");
            Err(AppError::not_found("url not found"))
        }
        Err(e) => {
            error!(error = %e, "failed to delete url");
            Err(AppError::internal("internal error"))
        }
    }
}

/// Rejects `DELETE /url` without an alias segment.
pub async fn missing_alias_handler() -> AppError {
    info!("alias is empty in delete");
    AppError::bad_request("alias is required")
}
