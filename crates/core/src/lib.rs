//! Carteira Core - Domain entities, services, and traits.
//!
//! This crate contains the allocation-strategy business logic for Carteira.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod events;
pub mod palette;
pub mod settings;
pub mod strategy;
pub mod validation;
pub mod wallets;

// Re-export common types from the strategy and asset modules
pub use assets::*;
pub use strategy::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
