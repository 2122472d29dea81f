/**
 * Error Conversion
 *
 * Turns backend errors into HTTP responses, and domain errors into
 * backend errors.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 401
 * }
 * ```
 *
 * # Sign-In Failures
 *
 * Every credentials failure (lookup error, unknown user, wrong password)
 * maps to the same 401 body so clients cannot tell them apart.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::signin::SignInError;
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<SignInError> for BackendError {
    fn from(err: SignInError) -> Self {
        match err {
            SignInError::UnknownProvider(id) => {
                BackendError::handler(StatusCode::NOT_FOUND, format!("Unknown provider: {}", id))
            }
            SignInError::Unavailable => BackendError::unavailable("Database not configured"),
            SignInError::CredentialsSignin(_) => BackendError::unauthorized("Invalid credentials"),
            SignInError::Session(_) => BackendError::internal("Server error"),
        }
    }
}
