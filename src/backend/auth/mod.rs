//! Authentication Module
//!
//! Email and password sign-in against a database-backed user record.
//!
//! # Architecture
//!
//! - **`credentials`** - Payload parsing and login form fields
//! - **`users`** - User record and stores
//! - **`provider`** - The credentials provider and its authorize callback
//! - **`sessions`** - JWT session tokens and sign-out
//! - **`signin`** - Sign-in flow tying the provider to sessions
//! - **`handlers`** - HTTP handlers
//!
//! # Bindings
//!
//! [`Auth`] exposes the four entry points an application mounts:
//!
//! - [`Auth::handlers`] - router with the HTTP endpoints
//! - [`Auth::auth`] - session check for a token
//! - [`Auth::sign_in`] - sign in with a provider
//! - [`Auth::sign_out`] - end a session
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard_auth::backend::auth::{Auth, users::MemoryUserStore};
//! use dashboard_auth::shared::AuthConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let users = MemoryUserStore::new();
//! users.register("User", "user@nextmail.com", "123456")?;
//!
//! let config = AuthConfig::builder().secret("change-me").build()?;
//! let auth = Auth::new(config, Some(Arc::new(users)));
//!
//! let credentials = serde_json::json!({ "email": "user@nextmail.com", "password": "123456" });
//! let signed_in = auth.sign_in("credentials", &credentials).await?;
//! assert!(auth.auth(&signed_in.issued.token).await.is_some());
//!
//! let app = auth.handlers();
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AuthConfig;

/// Login payload parsing
pub mod credentials;

/// User data model and stores
pub mod users;

/// Credentials provider
pub mod provider;

/// JWT token generation and validation
pub mod sessions;

/// Sign-in flow
pub mod signin;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use provider::{AuthorizeError, CredentialsProvider};
pub use sessions::{Session, SessionStore, SessionUser};
pub use signin::{SignIn, SignInError};
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};

/// Configured authentication with its four bindings
#[derive(Clone)]
pub struct Auth {
    state: AppState,
}

impl Auth {
    /// Configure authentication; `users` is `None` when no store is available
    pub fn new(config: AuthConfig, users: Option<Arc<dyn UserStore>>) -> Self {
        Self {
            state: AppState::new(config, users),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router with every auth endpoint mounted under the base path
    pub fn handlers(&self) -> Router<()> {
        create_router(self.state.clone())
    }

    /// Session for `token`, or `None` if it is invalid, expired or signed out
    pub async fn auth(&self, token: &str) -> Option<Session> {
        self.state.sessions.resolve(token).await
    }

    /// Sign in through `provider_id` with an untyped credentials payload
    pub async fn sign_in(
        &self,
        provider_id: &str,
        credentials: &serde_json::Value,
    ) -> Result<SignIn, SignInError> {
        signin::sign_in(
            &self.state.provider,
            &self.state.sessions,
            provider_id,
            credentials,
        )
        .await
    }

    /// End the session behind `token`
    ///
    /// Returns whether a live session was ended.
    pub async fn sign_out(&self, token: &str) -> bool {
        self.state.sessions.revoke(token).await
    }
}
