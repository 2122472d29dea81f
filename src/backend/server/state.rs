/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The authentication configuration
 * - The credentials provider (and through it the optional user store)
 * - The session store
 *
 * Everything is cheap to clone; the only mutable part, the revoked-session
 * map inside `SessionStore`, sits behind `Arc<RwLock<>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::provider::CredentialsProvider;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::auth::users::UserStore;
use crate::shared::AuthConfig;

/// Shared state of the auth handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuthConfig>,

    /// Credentials provider
    ///
    /// Has no user store when the database is not configured; sign-in then
    /// answers 503.
    pub provider: CredentialsProvider,

    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AuthConfig, users: Option<Arc<dyn UserStore>>) -> Self {
        let sessions = SessionStore::new(&config.secret, config.session_max_age);
        Self {
            config: Arc::new(config),
            provider: CredentialsProvider::new(users),
            sessions,
        }
    }
}

impl FromRef<AppState> for Arc<AuthConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for CredentialsProvider {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.provider.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
