//! Shared Error Types
//!
//! This module defines error types that are not tied to the HTTP layer.
//! They describe why an untyped payload could not be turned into a typed
//! value, and are mostly consumed by the credentials parser.
//!
//! # Error Categories
//!
//! - `SerializationError` - The payload does not have the expected JSON shape
//! - `ValidationError` - A field is present but violates a rule
//!
//! # Usage
//!
//! ```rust
//! use dashboard_auth::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "must be at least 6 characters");
//! assert!(error.to_string().contains("password"));
//! ```
use thiserror::Error;

/// Errors raised while turning untyped input into typed values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON shape mismatch (missing field, wrong type, not an object)
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
