//! Common test utilities and helpers
//!
//! - Authentication fixtures (config, seeded user store, test server)
//! - Database helpers for the PostgreSQL tests

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
