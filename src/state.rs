//! Shared application state.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::config::BasicCredentials;
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};

/// State injected into every route.
///
/// Handlers never see the whole state: each extracts only the store capability it
/// needs through [`FromRef`].
#[derive(Clone)]
pub struct AppState {
    pub url_saver: Arc<dyn UrlSaver>,
    pub url_getter: Arc<dyn UrlGetter>,
    pub url_deleter: Arc<dyn UrlDeleter>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    /// Builds state where one store provides every capability.
    pub fn new<S>(store: Arc<S>, credentials: BasicCredentials) -> Self
    where
        S: UrlSaver + UrlGetter + UrlDeleter + 'static,
    {
        Self {
            url_saver: store.clone(),
            url_getter: store.clone(),
            url_deleter: store,
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for Arc<dyn UrlSaver> {
    fn from_ref(state: &AppState) -> Self {
        state.url_saver.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlGetter> {
    fn from_ref(state: &AppState) -> Self {
        state.url_getter.clone()
    }
}

impl FromRef<AppState> for Arc<dyn UrlDeleter> {
    fn from_ref(state: &AppState) -> Self {
        state.url_deleter.clone()
    }
}

impl FromRef<AppState> for Arc<BasicCredentials> {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}
