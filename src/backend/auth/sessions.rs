/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the signed session tokens handed out
 * after a successful sign-in, and tracks tokens ended by sign-out.
 *
 * Tokens are HS256 JWTs. A token stays valid until it expires or its `jti`
 * is revoked; revocations are kept in memory until the token would have
 * expired anyway.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Token ID, used for revocation
    pub jti: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Public part of a user, safe to hand to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// An authenticated session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

impl Session {
    fn from_claims(claims: &Claims) -> Self {
        Self {
            user: SessionUser {
                id: claims.sub.clone(),
                name: claims.name.clone(),
                email: claims.email.clone(),
            },
            expires: to_datetime(claims.exp).unwrap_or_default(),
        }
    }
}

/// A freshly signed token and the session it encodes
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: Session,
}

/// Signs, verifies and revokes session tokens
#[derive(Clone)]
pub struct SessionStore {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    max_age: u64,
    /// Revoked token IDs with their expiry
    revoked: Arc<RwLock<HashMap<Uuid, u64>>>,
}

fn to_datetime(timestamp: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(timestamp).ok()?, 0)
}

fn now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

impl SessionStore {
    /// Create a store signing with `secret`; sessions last `max_age` seconds
    pub fn new(secret: &str, max_age: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            max_age,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a signed session token for a user
    ///
    /// Fails if the expiry does not fit a timestamp.
    pub fn issue(&self, user: &User) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
        let iat = now();
        let exp = iat
            .checked_add(self.max_age)
            .filter(|exp| to_datetime(*exp).is_some())
            .ok_or(ErrorKind::InvalidToken)?;
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            jti: Uuid::new_v4().to_string(),
            exp,
            iat,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(IssuedSession {
            token,
            session: Session::from_claims(&claims),
        })
    }

    /// Verify and decode a JWT token
    ///
    /// Checks signature and expiry only; see [`SessionStore::resolve`] for
    /// revocation.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Session for a token, if it is valid and not signed out
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let claims = match self.decode(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Rejected session token: {:?}", e);
                return None;
            }
        };

        let jti = Uuid::parse_str(&claims.jti).ok()?;
        if self.revoked.read().await.contains_key(&jti) {
            tracing::debug!("Session token {} was signed out", jti);
            return None;
        }

        Some(Session::from_claims(&claims))
    }

    /// End the session behind a token
    ///
    /// Returns whether a live session was ended.
    pub async fn revoke(&self, token: &str) -> bool {
        let Ok(claims) = self.decode(token) else {
            return false;
        };
        let Ok(jti) = Uuid::parse_str(&claims.jti) else {
            return false;
        };

        let now = now();
        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(jti, claims.exp).is_none()
    }

    /// Number of revocations currently tracked
    pub async fn revoked_count(&self) -> usize {
        self.revoked.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SECRET: &str = "test-secret";

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_issue_and_resolve() {
        let store = SessionStore::new(SECRET, 3600);
        let user = user();

        let issued = store.issue(&user).unwrap();
        assert!(!issued.token.is_empty());
        assert_eq!(issued.session.user.id, user.id.to_string());
        assert_eq!(issued.session.user.email, user.email);

        let session = store.resolve(&issued.token).await.unwrap();
        assert_eq!(session, issued.session);
    }

    #[test]
    fn test_token_contains_user_info() {
        let store = SessionStore::new(SECRET, 3600);
        let user = user();
        let issued = store.issue(&user).unwrap();

        let claims = store.decode(&issued.token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.name, "User");
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!issued.token.contains("$2b$"));
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new(SECRET, 3600);
        let user = user();
        let first = store.decode(&store.issue(&user).unwrap().token).unwrap();
        let second = store.decode(&store.issue(&user).unwrap().token).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_issue_rejects_unrepresentable_expiry() {
        for max_age in [u64::MAX, 1 << 62] {
            let store = SessionStore::new(SECRET, max_age);
            let err = store.issue(&user()).unwrap_err();
            assert_matches!(err.kind(), ErrorKind::InvalidToken);
        }
    }

    #[tokio::test]
    async fn test_long_session_expiry_is_accurate() {
        let max_age = crate::shared::config::MAX_SESSION_MAX_AGE;
        let store = SessionStore::new(SECRET, max_age);
        let issued = store.issue(&user()).unwrap();

        let claims = store.decode(&issued.token).unwrap();
        assert_eq!(issued.session.expires.timestamp(), claims.exp as i64);
        assert!(store.resolve(&issued.token).await.is_some());
    }

    #[tokio::test]
    async fn test_resolve_invalid_token() {
        let store = SessionStore::new(SECRET, 3600);
        assert!(store.resolve("invalid.token.here").await.is_none());
        assert!(store.resolve("").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_wrong_secret() {
        let issuer = SessionStore::new("other-secret", 3600);
        let store = SessionStore::new(SECRET, 3600);
        let issued = issuer.issue(&user()).unwrap();
        assert!(store.resolve(&issued.token).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_expired_token() {
        let store = SessionStore::new(SECRET, 3600);
        let issued_at = now() - 7200;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user@nextmail.com".to_string(),
            name: "User".to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: issued_at + 3600,
            iat: issued_at,
        };

        assert!(store.resolve(&sign(&claims, SECRET)).await.is_none());
    }

    #[tokio::test]
    async fn test_revoke() {
        let store = SessionStore::new(SECRET, 3600);
        let issued = store.issue(&user()).unwrap();

        assert!(store.revoke(&issued.token).await);
        assert!(store.resolve(&issued.token).await.is_none());
        // already signed out
        assert!(!store.revoke(&issued.token).await);
        assert_eq!(store.revoked_count().await, 1);
    }

    #[tokio::test]
    async fn test_revoke_leaves_other_sessions() {
        let store = SessionStore::new(SECRET, 3600);
        let user = user();
        let first = store.issue(&user).unwrap();
        let second = store.issue(&user).unwrap();

        store.revoke(&first.token).await;
        assert!(store.resolve(&second.token).await.is_some());
    }

    #[tokio::test]
    async fn test_revoke_invalid_token() {
        let store = SessionStore::new(SECRET, 3600);
        assert!(!store.revoke("garbage").await);
        assert_eq!(store.revoked_count().await, 0);
    }

    #[tokio::test]
    async fn test_expired_revocations_are_pruned() {
        let store = SessionStore::new(SECRET, 3600);
        store
            .revoked
            .write()
            .await
            .insert(Uuid::new_v4(), now() - 10);

        let issued = store.issue(&user()).unwrap();
        store.revoke(&issued.token).await;
        assert_eq!(store.revoked_count().await, 1);
    }

    #[test]
    fn test_session_serialization() {
        let store = SessionStore::new(SECRET, 3600);
        let issued = store.issue(&user()).unwrap();
        let json = serde_json::to_value(&issued.session).unwrap();

        assert!(json["user"]["id"].is_string());
        assert_eq!(json["user"]["email"], "user@nextmail.com");
        assert!(json["expires"].is_string());
        assert!(json["user"].get("password_hash").is_none());
    }
}
