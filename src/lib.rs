//! Dashboard Auth
//!
//! Email and password authentication for a dashboard application: a
//! credentials provider that checks a login against a PostgreSQL `users`
//! table with bcrypt, JWT sessions, and the HTTP endpoints to sign in,
//! check the session and sign out.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and shared error types
//! - **`backend`** - Axum server, auth flow and user stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use dashboard_auth::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app().await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Applications that bring their own user store use
//! [`backend::auth::Auth`] directly.

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
