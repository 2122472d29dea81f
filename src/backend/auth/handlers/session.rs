/**
 * Session Handler
 *
 * GET {base}/session - the auth check. Returns the session for the bearer
 * token, or `null` when there is no valid session. Never fails.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::SessionToken;
use crate::backend::auth::sessions::{Session, SessionStore};

pub async fn get_session(
    State(sessions): State<SessionStore>,
    SessionToken(token): SessionToken,
) -> Json<Option<Session>> {
    let session = match token {
        Some(token) => sessions.resolve(&token).await,
        None => None,
    };

    Json(session)
}
