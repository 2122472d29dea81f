/**
 * Sign-Out Handler
 *
 * POST {base}/signout - ends the session behind the bearer token and tells
 * the client where to go next. Signing out without a valid session is not
 * an error.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{SessionToken, SignOutResponse};
use crate::backend::server::state::AppState;

pub async fn sign_out(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Json<SignOutResponse> {
    if let Some(token) = token {
        if state.sessions.revoke(&token).await {
            tracing::info!("Session signed out");
        }
    }

    Json(SignOutResponse {
        url: state.config.sign_in_page.clone(),
    })
}
