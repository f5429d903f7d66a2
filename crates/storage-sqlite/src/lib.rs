//! SQLite storage implementation for Shopadmin.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `shopadmin-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the currency entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.

pub mod currencies;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from shopadmin-core for convenience
pub use shopadmin_core::errors::{DatabaseError, Error, Result};
