//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints. They are mounted under the
//! configured base path (default `/api/auth`).
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Handler exports
//! ├── types.rs      - Extractors and response types
//! ├── providers.rs  - GET  /providers
//! ├── signin.rs     - POST /callback/{provider}
//! ├── session.rs    - GET  /session
//! └── signout.rs    - POST /signout
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign In**: Client posts email and password → Credentials authorized → token returned
//! 2. **Session**: Client sends `Authorization: Bearer <token>` → Session or `null`
//! 3. **Sign Out**: Client sends the token → Token revoked → sign-in page URL returned

/// Extractors and response types
pub mod types;

/// Provider listing
pub mod providers;

/// Sign-in handler
pub mod signin;

/// Session check handler
pub mod session;

/// Sign-out handler
pub mod signout;

pub use types::{CredentialsPayload, SessionToken, SignInResponse, SignOutResponse};

pub use providers::providers;
pub use session::get_session;
pub use signin::sign_in;
pub use signout::sign_out;
