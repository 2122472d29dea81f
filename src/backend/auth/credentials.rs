/**
 * Login Credentials
 *
 * Typed view of the untyped credentials payload submitted to the
 * credentials provider, plus the field descriptors clients use to render
 * the login form.
 *
 * # Shape Rules
 *
 * - `email` must be a string holding a valid email address
 * - `password` must be a string of at least 6 UTF-16 code units
 * - Unknown fields are ignored
 */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Minimum accepted password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Email and password extracted from a credentials payload
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

impl LoginCredentials {
    /// Parse and validate an untyped payload
    ///
    /// Never panics; every shape problem is reported as a `SharedError`.
    pub fn safe_parse(payload: &serde_json::Value) -> Result<Self, SharedError> {
        let credentials: LoginCredentials = serde_json::from_value(payload.clone())?;

        if !email_address::EmailAddress::is_valid(&credentials.email) {
            return Err(SharedError::validation("email", "Invalid email"));
        }

        if credentials.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(SharedError::validation(
                "password",
                format!(
                    "String must contain at least {} character(s)",
                    MIN_PASSWORD_LENGTH
                ),
            ));
        }

        Ok(credentials)
    }
}

/// Describes one input of the login form
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialField {
    /// HTML input type
    #[serde(rename = "type")]
    pub input_type: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Form fields accepted by the credentials provider, keyed by field name
pub fn credential_fields() -> BTreeMap<&'static str, CredentialField> {
    BTreeMap::from([
        (
            "email",
            CredentialField {
                input_type: "email",
                label: "Email",
                placeholder: "Enter email",
            },
        ),
        (
            "password",
            CredentialField {
                input_type: "password",
                label: "Password",
                placeholder: "Enter password",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_valid_credentials() {
        let payload = json!({ "email": "user@nextmail.com", "password": "123456" });
        let credentials = LoginCredentials::safe_parse(&payload).unwrap();
        assert_eq!(credentials.email, "user@nextmail.com");
        assert_eq!(credentials.password, "123456");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let payload = json!({
            "email": "user@nextmail.com",
            "password": "123456",
            "callbackUrl": "/dashboard",
        });
        assert!(LoginCredentials::safe_parse(&payload).is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let payload = json!({ "email": "not-an-email", "password": "123456" });
        assert_matches!(
            LoginCredentials::safe_parse(&payload),
            Err(SharedError::ValidationError { field, .. }) if field == "email"
        );
    }

    #[test]
    fn test_password_too_short() {
        let payload = json!({ "email": "user@nextmail.com", "password": "12345" });
        assert_matches!(
            LoginCredentials::safe_parse(&payload),
            Err(SharedError::ValidationError { field, .. }) if field == "password"
        );
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // five units, ten bytes
        let payload = json!({ "email": "user@nextmail.com", "password": "ééééé" });
        assert!(LoginCredentials::safe_parse(&payload).is_err());

        // three characters outside the BMP, two units each
        let payload = json!({ "email": "user@nextmail.com", "password": "😀😀😀" });
        assert!(LoginCredentials::safe_parse(&payload).is_ok());

        let payload = json!({ "email": "user@nextmail.com", "password": "😀😀" });
        assert!(LoginCredentials::safe_parse(&payload).is_err());
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let payloads = [
            json!({ "email": "user@nextmail.com" }),
            json!({ "password": "123456" }),
            json!({ "email": 42, "password": "123456" }),
            json!({ "email": "user@nextmail.com", "password": null }),
            json!(null),
            json!("user@nextmail.com"),
        ];

        for payload in payloads {
            assert_matches!(
                LoginCredentials::safe_parse(&payload),
                Err(SharedError::SerializationError { .. }),
                "payload {} should not parse",
                payload
            );
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let payload = json!({ "email": "user@nextmail.com", "password": "hunter22" });
        let credentials = LoginCredentials::safe_parse(&payload).unwrap();
        assert!(!format!("{:?}", credentials).contains("hunter22"));
    }

    #[test]
    fn test_credential_fields() {
        let fields = credential_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["email"].input_type, "email");
        assert_eq!(fields["password"].placeholder, "Enter password");

        let json = serde_json::to_value(&fields["email"]).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["label"], "Email");
    }
}
