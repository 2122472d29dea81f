/**
 * User Model and Storage
 *
 * This module holds the user record read by the credentials provider and
 * the stores it can be read from.
 *
 * # Stores
 *
 * - `PgUserStore` - PostgreSQL `users` table
 * - `MemoryUserStore` - in-process map, for development and tests
 *
 * Users are created and removed by account management elsewhere; the
 * login flow only reads one record by email.
 */

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// bcrypt work factor used for new password hashes
pub const PASSWORD_HASH_COST: u32 = 10;

/// User record as stored in the database
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// bcrypt hash of the user's password
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// Read access to user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Point lookup by email
    ///
    /// `None` stands for a null email and never matches a record.
    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, sqlx::Error>;
}

/// Hash a password with bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, PASSWORD_HASH_COST)
}

/// PostgreSQL-backed user store
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - User email
    /// * `password_hash` - bcrypt hash, see [`hash_password`]
    ///
    /// # Returns
    /// Created user or error
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[tracing::instrument(name = "Fetch user by email", skip(self))]
    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, sqlx::Error> {
        // a NULL parameter compares unknown against every row, so no match
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory user store keyed by email
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user, keyed by its email
    pub fn insert(&self, user: User) {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.insert(user.email.clone(), user);
    }

    /// Hash `password` and add a new user
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, bcrypt::BcryptError> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
        };
        self.insert(user.clone());
        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: Option<&str>) -> Result<Option<User>, sqlx::Error> {
        let Some(email) = email else {
            return Ok(None);
        };
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.get(email).cloned())
    }
}
