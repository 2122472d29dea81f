//! Authentication test helpers
//!
//! Provides a test configuration, an in-memory user store seeded with a
//! known user, and a test server wrapping the auth router.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use dashboard_auth::backend::auth::users::{MemoryUserStore, User, UserStore};
use dashboard_auth::backend::server::build_app;
use dashboard_auth::shared::AuthConfig;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_NAME: &str = "User";
pub const TEST_EMAIL: &str = "user@nextmail.com";
pub const TEST_PASSWORD: &str = "123456";

/// bcrypt cost for fixtures; the minimum keeps tests fast
const TEST_HASH_COST: u32 = 4;

pub fn test_config() -> AuthConfig {
    AuthConfig::builder()
        .secret(TEST_SECRET)
        .build()
        .expect("test config is valid")
}

/// Create a user record with a cheap bcrypt hash
pub fn test_user(name: &str, email: &str, password: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: bcrypt::hash(password, TEST_HASH_COST).expect("Failed to hash password"),
    }
}

/// Store holding the single known test user
pub fn seeded_store() -> MemoryUserStore {
    let store = MemoryUserStore::new();
    store.insert(test_user(TEST_NAME, TEST_EMAIL, TEST_PASSWORD));
    store
}

/// User store whose lookups always fail, like an unreachable database
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn find_by_email(&self, _email: Option<&str>) -> Result<Option<User>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Test server over the auth router with the given user store
pub fn create_test_server(users: Option<Arc<dyn UserStore>>) -> TestServer {
    TestServer::new(build_app(test_config(), users)).expect("Failed to create test server")
}

/// Test server with the seeded store
pub fn seeded_server() -> TestServer {
    create_test_server(Some(Arc::new(seeded_store())))
}

pub fn credentials(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}
