/**
 * Sign-In Handler
 *
 * POST {base}/callback/{provider} - authenticates a credentials payload
 * (JSON or form) and returns a session token.
 *
 * # Security
 *
 * - Unknown email, wrong password and lookup failures all return the same
 *   401 response
 * - The password hash never leaves the server
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{redirect_target, CredentialsPayload, SignInResponse};
use crate::backend::auth::signin;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Sign-in handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is neither JSON nor a form
/// * `401 Unauthorized` - If the credentials are rejected for any reason
/// * `404 Not Found` - If the provider is unknown
/// * `503 Service Unavailable` - If the database is not configured
///
/// # Example Request
///
/// ```http
/// POST /api/auth/callback/credentials HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@nextmail.com", "password": "123456", "callbackUrl": "/dashboard" }
/// ```
pub async fn sign_in(
    State(state): State<AppState>,
    Path(provider_id): Path<String>,
    CredentialsPayload(credentials): CredentialsPayload,
) -> Result<Json<SignInResponse>, BackendError> {
    let signed_in =
        signin::sign_in(&state.provider, &state.sessions, &provider_id, &credentials).await?;

    Ok(Json(SignInResponse {
        token: signed_in.issued.token,
        session: signed_in.issued.session,
        url: redirect_target(&credentials),
    }))
}
