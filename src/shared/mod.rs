//! Shared Module
//!
//! Types that do not depend on the HTTP server: configuration and the
//! error types produced while parsing untyped input.

/// Shared error types
pub mod error;

/// Authentication configuration
pub mod config;

pub use error::SharedError;
pub use config::{AuthConfig, AuthConfigBuilder, ConfigError};
