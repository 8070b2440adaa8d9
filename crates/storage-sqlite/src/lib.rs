//! SQLite storage implementation for Carteira.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `carteira-core` and contains:
//! - Database connection pooling and management
//! - The embedded baseline migration
//! - Repository implementations for wallets, strategy blobs, and settings
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core crate is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod settings;
pub mod wallets;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from carteira-core for convenience
pub use carteira_core::errors::{DatabaseError, Error, Result};
