//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the credentials provider,
//! session handling and the PostgreSQL user store.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credentials provider, sessions, sign-in and sign-out
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the configuration, the credentials
//! provider and the session store. The user store is optional; without a
//! database sign-in answers 503 while the other endpoints keep working.
//!
//! # Error Handling
//!
//! - `BackendError` for handler errors, rendered as a JSON body
//! - `SignInError` and `AuthorizeError` inside the auth flow
//! - Proper error propagation with `?` operator

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

pub use auth::Auth;
pub use error::BackendError;
pub use server::create_app;
