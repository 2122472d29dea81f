//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── auth_routes.rs  - Auth endpoint routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use dashboard_auth::backend::routes::create_router;
//! use dashboard_auth::backend::server::state::AppState;
//! use dashboard_auth::shared::AuthConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::builder().secret("change-me").build()?;
//! let router = create_router(AppState::new(config, None));
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Auth endpoint routes
pub mod auth_routes;

pub use router::create_router;
