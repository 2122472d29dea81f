//! Database test fixtures
//!
//! The PostgreSQL tests need `DATABASE_URL` pointing at a scratch
//! database; they are `#[ignore]`d by default.

use sqlx::PgPool;

/// Create a test database connection pool with migrations applied
pub async fn create_test_pool() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for database tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Unique email so tests can share one database
pub fn unique_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}
