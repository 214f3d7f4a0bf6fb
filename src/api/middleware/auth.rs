//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use std::sync::Arc;

use crate::config::BasicCredentials;
use crate::error::AppError;

/// Authenticates requests against the configured username/password pair.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if the
/// header is missing, malformed, or carries the wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// let protected = api::routes::protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(credentials): State<Arc<BasicCredentials>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::info!("missing or malformed basic auth header");
            AppError::Unauthorized
        })?;

    if !credentials.matches(&username, password.as_deref().unwrap_or_default()) {
        tracing::info!(username = %username, "invalid basic auth credentials");
        return Err(AppError::Unauthorized);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
