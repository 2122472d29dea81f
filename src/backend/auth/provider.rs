/**
 * Credentials Provider
 *
 * Authenticates a user by email and password against a `UserStore`.
 *
 * # Authorize Process
 *
 * 1. Parse the payload; a payload that fails validation is not rejected,
 *    it continues with a null email and password
 * 2. Look up the user by email
 * 3. Compare the password with the stored bcrypt hash on the blocking pool
 * 4. Return the full user record
 *
 * Every failure is an `AuthorizeError` with a human-readable message and no
 * further structure. Callers decide how to present them.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::credentials::LoginCredentials;
use crate::backend::auth::users::{User, UserStore};

/// Identifier the provider is addressed by in sign-in requests
pub const CREDENTIALS_PROVIDER_ID: &str = "credentials";

/// Why `authorize` rejected a payload
#[derive(Debug, Error)]
pub enum AuthorizeError {
    /// The store could not be queried
    #[error("Failed to fetch user.")]
    FetchFailed(#[source] Option<sqlx::Error>),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password.")]
    InvalidPassword,
}

/// Email and password provider backed by a user store
#[derive(Clone)]
pub struct CredentialsProvider {
    users: Option<Arc<dyn UserStore>>,
}

impl CredentialsProvider {
    /// Create a provider; `None` means no store is configured
    pub fn new(users: Option<Arc<dyn UserStore>>) -> Self {
        Self { users }
    }

    pub fn id(&self) -> &'static str {
        CREDENTIALS_PROVIDER_ID
    }

    pub fn name(&self) -> &'static str {
        "Credentials"
    }

    /// Whether a user store is configured
    pub fn is_available(&self) -> bool {
        self.users.is_some()
    }

    /// Validate a credentials payload and return the matching user
    #[tracing::instrument(name = "Authorize credentials", skip(self, credentials))]
    pub async fn authorize(&self, credentials: &serde_json::Value) -> Result<User, AuthorizeError> {
        let (email, password) = match LoginCredentials::safe_parse(credentials) {
            Ok(parsed) => (Some(parsed.email), Some(parsed.password)),
            Err(e) => {
                tracing::debug!("Credentials failed validation, continuing without them: {}", e);
                (None, None)
            }
        };

        let user = self
            .get_user(email.as_deref())
            .await?
            .ok_or(AuthorizeError::UserNotFound)?;

        let passwords_match = match password {
            Some(password) => verify_password(password, user.password_hash.clone()).await,
            None => false,
        };

        if !passwords_match {
            return Err(AuthorizeError::InvalidPassword);
        }

        tracing::info!(user_id = %user.id, "Sign in successful!");
        Ok(user)
    }

    async fn get_user(&self, email: Option<&str>) -> Result<Option<User>, AuthorizeError> {
        let Some(users) = &self.users else {
            tracing::error!("Failed to fetch user: database not configured");
            return Err(AuthorizeError::FetchFailed(None));
        };

        users.find_by_email(email).await.map_err(|e| {
            tracing::error!("Failed to fetch user: {:?}", e);
            AuthorizeError::FetchFailed(Some(e))
        })
    }
}

/// Compare a candidate password with a bcrypt hash
///
/// A malformed hash or a failed blocking task counts as a mismatch.
async fn verify_password(candidate: String, expected_hash: String) -> bool {
    let outcome = tokio::task::spawn_blocking(move || {
        bcrypt::verify(candidate.as_bytes(), &expected_hash)
    })
    .await;

    match outcome {
        Ok(Ok(matches)) => matches,
        Ok(Err(e)) => {
            tracing::warn!("Stored password hash could not be verified: {:?}", e);
            false
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {:?}", e);
            false
        }
    }
}
