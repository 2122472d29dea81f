/**
 * Auth Route Handlers
 *
 * Routes for the authentication endpoints, relative to the base path.
 *
 * # Routes
 *
 * - `GET  /providers` - Provider listing
 * - `POST /callback/{provider}` - Sign in
 * - `GET  /session` - Session check
 * - `POST /signout` - Sign out
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_session, providers, sign_in, sign_out};
use crate::backend::server::state::AppState;

/// Configure auth routes
///
/// The returned router is nested under the configured base path by
/// [`create_router`](super::router::create_router).
///
/// # Authentication
///
/// `/session` and `/signout` read the session token from the
/// `Authorization: Bearer <token>` header. The other routes are public.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/providers", get(providers))
        .route("/callback/{provider}", post(sign_in))
        .route("/session", get(get_session))
        .route("/signout", post(sign_out))
}
