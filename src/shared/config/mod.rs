//! Authentication configuration
//!
//! `AuthConfig` carries the provider and session settings shared by every
//! binding: the token signing secret, the session lifetime, the path the
//! HTTP handlers are mounted under and the sign-in page clients are sent to
//! after signing out.
//!
//! Values come either from the builder or from the environment
//! (`AuthConfig::from_env`).

use thiserror::Error;

/// Default session lifetime: 30 days
pub const DEFAULT_SESSION_MAX_AGE: u64 = 30 * 24 * 60 * 60;

/// Longest accepted session lifetime: 10 years
pub const MAX_SESSION_MAX_AGE: u64 = 10 * 365 * 24 * 60 * 60;

/// Default mount point of the auth handlers
pub const DEFAULT_BASE_PATH: &str = "/api/auth";

/// Default sign-in page
pub const DEFAULT_SIGN_IN_PAGE: &str = "/login";

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    pub secret: String,
    /// Session lifetime in seconds
    pub session_max_age: u64,
    /// Path the auth handlers are nested under
    pub base_path: String,
    /// Page clients are redirected to after signing out
    pub sign_in_page: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[redacted]")
            .field("session_max_age", &self.session_max_age)
            .field("base_path", &self.base_path)
            .field("sign_in_page", &self.sign_in_page)
            .finish()
    }
}

impl AuthConfig {
    /// Create a new AuthConfigBuilder
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `AUTH_SECRET` | required |
    /// | `AUTH_SESSION_MAX_AGE` | 2592000 (30 days) |
    /// | `AUTH_BASE_PATH` | `/api/auth` |
    /// | `AUTH_SIGN_IN_PAGE` | `/login` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(secret) = std::env::var("AUTH_SECRET") {
            builder = builder.secret(secret);
        }

        if let Ok(max_age) = std::env::var("AUTH_SESSION_MAX_AGE") {
            let max_age = max_age
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "AUTH_SESSION_MAX_AGE",
                    value: max_age.clone(),
                })?;
            builder = builder.session_max_age(max_age);
        }

        if let Ok(base_path) = std::env::var("AUTH_BASE_PATH") {
            builder = builder.base_path(base_path);
        }

        if let Ok(page) = std::env::var("AUTH_SIGN_IN_PAGE") {
            builder = builder.sign_in_page(page);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("AUTH_SECRET"));
        }

        if self.session_max_age == 0 || self.session_max_age > MAX_SESSION_MAX_AGE {
            return Err(ConfigError::InvalidValue {
                name: "AUTH_SESSION_MAX_AGE",
                value: self.session_max_age.to_string(),
            });
        }

        // axum cannot nest at the root, and a trailing slash would produce `//` routes
        let base = &self.base_path;
        if !base.starts_with('/') || base.len() < 2 || base.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "AUTH_BASE_PATH",
                value: base.clone(),
            });
        }

        if !self.sign_in_page.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "AUTH_SIGN_IN_PAGE",
                value: self.sign_in_page.clone(),
            });
        }

        Ok(())
    }
}

/// Builder for AuthConfig
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    secret: Option<String>,
    session_max_age: Option<u64>,
    base_path: Option<String>,
    sign_in_page: Option<String>,
}

impl AuthConfigBuilder {
    /// Set the token signing secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the session lifetime in seconds
    pub fn session_max_age(mut self, seconds: u64) -> Self {
        self.session_max_age = Some(seconds);
        self
    }

    /// Set the path the handlers are mounted under
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the sign-in page
    pub fn sign_in_page(mut self, page: impl Into<String>) -> Self {
        self.sign_in_page = Some(page.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let config = AuthConfig {
            secret: self.secret.ok_or(ConfigError::MissingValue("AUTH_SECRET"))?,
            session_max_age: self.session_max_age.unwrap_or(DEFAULT_SESSION_MAX_AGE),
            base_path: self
                .base_path
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            sign_in_page: self
                .sign_in_page
                .unwrap_or_else(|| DEFAULT_SIGN_IN_PAGE.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
