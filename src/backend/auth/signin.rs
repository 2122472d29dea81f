/**
 * Sign-In Flow
 *
 * Runs a provider's authorize callback and, on success, issues a session
 * token. Any authorize failure becomes `SignInError::CredentialsSignin`;
 * the specific cause is kept as the error source and logged, but callers
 * present all of them as "invalid credentials".
 */

use thiserror::Error;

use crate::backend::auth::provider::{AuthorizeError, CredentialsProvider};
use crate::backend::auth::sessions::{IssuedSession, SessionStore};
use crate::backend::auth::users::User;

/// Result of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignIn {
    /// The authorized user, as returned by the provider
    pub user: User,
    pub issued: IssuedSession,
}

#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// No user store is configured
    #[error("Sign-in is unavailable")]
    Unavailable,

    #[error("Invalid credentials")]
    CredentialsSignin(#[source] AuthorizeError),

    #[error("Failed to create session")]
    Session(#[source] jsonwebtoken::errors::Error),
}

/// Sign in through the provider named `provider_id`
#[tracing::instrument(name = "Sign in", skip(provider, sessions, credentials))]
pub async fn sign_in(
    provider: &CredentialsProvider,
    sessions: &SessionStore,
    provider_id: &str,
    credentials: &serde_json::Value,
) -> Result<SignIn, SignInError> {
    if provider_id != provider.id() {
        tracing::warn!("Sign-in requested for unknown provider");
        return Err(SignInError::UnknownProvider(provider_id.to_string()));
    }

    if !provider.is_available() {
        tracing::error!("Database not configured");
        return Err(SignInError::Unavailable);
    }

    let user = provider.authorize(credentials).await.map_err(|e| {
        tracing::warn!("Credentials sign-in rejected: {}", e);
        SignInError::CredentialsSignin(e)
    })?;

    let issued = sessions.issue(&user).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        SignInError::Session(e)
    })?;

    Ok(SignIn { user, issued })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::MemoryUserStore;
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (CredentialsProvider, SessionStore) {
        let store = MemoryUserStore::new();
        store.insert(User {
            id: uuid::Uuid::new_v4(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password_hash: bcrypt::hash("123456", 4).unwrap(),
        });
        (
            CredentialsProvider::new(Some(Arc::new(store))),
            SessionStore::new("test-secret", 3600),
        )
    }

    #[tokio::test]
    async fn test_sign_in_issues_resolvable_token() {
        let (provider, sessions) = setup();
        let credentials = json!({ "email": "user@nextmail.com", "password": "123456" });

        let signed_in = sign_in(&provider, &sessions, "credentials", &credentials)
            .await
            .unwrap();

        assert_eq!(signed_in.user.email, "user@nextmail.com");
        let session = sessions.resolve(&signed_in.issued.token).await.unwrap();
        assert_eq!(session.user.id, signed_in.user.id.to_string());
    }

    #[tokio::test]
    async fn test_sign_in_wraps_authorize_errors() {
        let (provider, sessions) = setup();

        let wrong = json!({ "email": "user@nextmail.com", "password": "654321" });
        let result = sign_in(&provider, &sessions, "credentials", &wrong).await;
        assert_matches!(
            result,
            Err(SignInError::CredentialsSignin(AuthorizeError::InvalidPassword))
        );

        let unknown = json!({ "email": "nobody@nextmail.com", "password": "123456" });
        let result = sign_in(&provider, &sessions, "credentials", &unknown).await;
        assert_matches!(
            result,
            Err(SignInError::CredentialsSignin(AuthorizeError::UserNotFound))
        );
    }

    #[tokio::test]
    async fn test_sign_in_unknown_provider() {
        let (provider, sessions) = setup();
        let result = sign_in(&provider, &sessions, "github", &json!({})).await;
        assert_matches!(result, Err(SignInError::UnknownProvider(id)) if id == "github");
    }

    #[tokio::test]
    async fn test_sign_in_without_store() {
        let provider = CredentialsProvider::new(None);
        let sessions = SessionStore::new("test-secret", 3600);
        let credentials = json!({ "email": "user@nextmail.com", "password": "123456" });

        let result = sign_in(&provider, &sessions, "credentials", &credentials).await;
        assert_matches!(result, Err(SignInError::Unavailable));
    }
}
