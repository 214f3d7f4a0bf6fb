//! Handler for the save endpoint.

use axum::{Json, body::Bytes, extract::State, extract::rejection::BytesRejection};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlSaver;
use crate::error::AppError;
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

/// How many fresh aliases are tried when a generated alias collides.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "abc123" }
/// ```
///
/// `alias` is optional; when empty a 6-letter alias is generated. The body is
/// decoded as JSON whatever `Content-Type` the client sends.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "abc123" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or `url` is missing/invalid
/// - 409 if the alias is already taken
/// - 500 on storage failures
#[instrument(name = "handlers.url.save", skip_all)]
pub async fn save_handler(
    State(saver): State<Arc<dyn UrlSaver>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let req = decode(body)?;

    info!(url = %req.url, alias = ?req.alias, "request body decoded");

    req.validate().map_err(|e| {
        error!(error = %e, "invalid request");
        AppError::from(e)
    })?;

    let alias = match req.requested_alias() {
        Some(alias) => {
            save(saver.as_ref(), &req.url, alias).await?;
            alias.to_string()
        }
        None => save_with_generated_alias(saver.as_ref(), &req.url).await?,
    };

    info!(url = %req.url, alias = %alias, "url added");

    Ok(Json(SaveResponse::ok(alias)))
}

fn decode(body: Result<Bytes, BytesRejection>) -> Result<SaveRequest, AppError> {
    let body = body.map_err(|e| {
        error!(error = %e, "failed to read request body");
        AppError::bad_request("failed to decode request")
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })
}

/// Saves under a fresh random alias, retrying on collision.
async fn save_with_generated_alias(saver: &dyn UrlSaver, url: &str) -> Result<String, AppError> {
    for attempt in 1..=MAX_GENERATE_ATTEMPTS {
        let alias = generate_alias(DEFAULT_ALIAS_LENGTH);

        match saver.save_url(url, &alias).await {
            Ok(()) => return Ok(alias),
            Err(StorageError::AliasExists) => {
                warn!(alias = %alias, attempt, "generated alias collided");
            }
            Err(e) => return Err(storage_failure(e)),
        }
    }

    error!(
        attempts = MAX_GENERATE_ATTEMPTS,
        "failed to find a free alias"
    );
    Err(AppError::conflict("alias already exists"))
}

async fn save(saver: &dyn UrlSaver, url: &str, alias: &str) -> Result<(), AppError> {
    match saver.save_url(url, alias).await {
        Ok(()) => Ok(()),
        Err(StorageError::AliasExists) => {
            info!(alias, "alias already exists");
            Err(AppError::conflict("alias already exists"))
        }
        Err(e) => Err(storage_failure(e)),
    }
}

fn storage_failure(err: StorageError) -> AppError {
    error!(error = %err, "failed to add url");
    AppError::internal("failed to add url")
}
