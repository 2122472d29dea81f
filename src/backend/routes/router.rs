/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes, nested under the configured base path
 * 2. Fallback handler (JSON 404)
 * 3. Request tracing layer
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state with the config, provider and sessions
///
/// # Route Details
///
/// With the default base path `/api/auth`:
///
/// - `GET  /api/auth/providers`
/// - `POST /api/auth/callback/{provider}`
/// - `GET  /api/auth/session`
/// - `POST /api/auth/signout`
///
/// Unknown routes get a JSON 404 body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let auth_routes = configure_auth_routes(Router::new());

    Router::new()
        .nest(&app_state.config.base_path, auth_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
