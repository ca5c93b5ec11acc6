//! Exact price/volume amounts and listing identity
//!
//! Core library for basis-aware fixed-point amounts, get-or-create listing
//! resolution and lazily materialized priced market events.

pub mod core;
pub mod infrastructure;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use crate::core::{
    Amount, Basis, DecimalAmount, DiscreteAmount, Fungible, FungibleRegistry, Listing,
    ListingResolver, Market, PriceData, Priced,
};
pub use infrastructure::config::{Config, ConfigError};
pub use store::{ListingStore, MemoryStore, StoreError};

use thiserror::Error;

/// Main error type for the schema layer
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Malformed or unresolvable caller input (symbols, listing strings)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-positive basis or otherwise unusable instrument configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A decimal value does not fit the i64 count range at the given basis
    #[error("Amount overflow: {0}")]
    Overflow(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The store reported a uniqueness conflict but the conflicting row is not visible
    #[error("Store inconsistency: {0}")]
    StoreInconsistency(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SchemaError>;
