/**
 * Server Configuration
 *
 * This module loads the optional PostgreSQL connection and the listen port.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. Without a
 * database the credentials provider has no user store and sign-in answers
 * 503 Service Unavailable.
 */

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Port used when `SERVER_PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Database configuration result
///
/// `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if `DATABASE_URL` is not set or connection fails
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Sign-in will be unavailable.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Sign-in will be unavailable.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // the table may already exist from an earlier deployment
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Listen port from `SERVER_PORT`
pub fn server_port() -> u16 {
    parse_port(std::env::var("SERVER_PORT").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    match value.map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(_)) => {
            tracing::warn!("Invalid SERVER_PORT, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}
