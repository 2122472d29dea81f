/**
 * Server Initialization
 *
 * This module builds the Axum application.
 *
 * # Initialization Process
 *
 * 1. Load the authentication configuration from the environment
 * 2. Load the optional database and wrap it in a `PgUserStore`
 * 3. Create the application state and router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::{PgUserStore, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::{AuthConfig, ConfigError};

/// Create and configure the Axum application from the environment
///
/// # Errors
///
/// Fails only on invalid authentication configuration. A missing or
/// unreachable database is logged and leaves sign-in unavailable.
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing auth server");

    let config = AuthConfig::from_env()?;
    tracing::info!(base_path = %config.base_path, "Authentication configured");

    let users = load_database()
        .await
        .map(|pool| Arc::new(PgUserStore::new(pool)) as Arc<dyn UserStore>);

    Ok(build_app(config, users))
}

/// Build the application from explicit parts
pub fn build_app(config: AuthConfig, users: Option<Arc<dyn UserStore>>) -> Router<()> {
    let app_state = AppState::new(config, users);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
