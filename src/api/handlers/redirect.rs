//! Handler for short alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::domain::error::StorageError;
use crate::domain::repositories::UrlGetter;
use crate::error::AppError;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Response
///
/// `302 Found` with the destination in `Location`.
///
/// # Errors
///
/// - 400 if the alias is empty
/// - 404 if no mapping exists
/// - 500 on storage failures
#[instrument(name = "handlers.redirect", skip_all, fields(alias = %alias))]
pub async fn redirect_handler(
    State(getter): State<Arc<dyn UrlGetter>>,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::bad_request("invalid request"));
    }

    let destination = match getter.get_url(&alias).await {
        Ok(url) => url,
        Err(StorageError::AliasNotFound) => {
            info!("url not found");
            return Err(AppError::not_found("url not found"));
        }
        Err(e) => {
            error!(error = %e, "failed to get url");
            return Err(AppError::internal("internal error"));
        }
    };

    let location = HeaderValue::try_from(destination.as_str()).map_err(|e| {
        error!(error = %e, url = %destination, "destination is not a valid header value");
        AppError::internal("internal error")
    })?;

    info!(url = %destination, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
