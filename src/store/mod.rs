//! Durable store seam for listings
//!
//! The store is the sole arbiter of pair uniqueness: `insert` must fail
//! with [`StoreError::UniquenessConflict`] when the pair already exists,
//! atomically with respect to other inserts.

pub mod memory;

pub use memory::MemoryStore;

use crate::core::{Fungible, Listing};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another writer already registered this pair
    #[error("Listing {symbol} already exists")]
    UniquenessConflict { symbol: String },

    /// Any other backend failure; never retried by the resolver
    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Listing persistence
pub trait ListingStore: Send + Sync {
    /// Zero or one listing for the pair
    fn find(&self, base: &Fungible, quote: &Fungible) -> Result<Option<Arc<Listing>>, StoreError>;

    /// Every stored listing, in store iteration order
    fn find_all(&self) -> Result<Vec<Arc<Listing>>, StoreError>;

    /// Persist a new listing and return the stored handle
    fn insert(&self, listing: Listing) -> Result<Arc<Listing>, StoreError>;
}

impl<T: ListingStore + ?Sized> ListingStore for Arc<T> {
    fn find(&self, base: &Fungible, quote: &Fungible) -> Result<Option<Arc<Listing>>, StoreError> {
        (**self).find(base, quote)
    }

    fn find_all(&self) -> Result<Vec<Arc<Listing>>, StoreError> {
        (**self).find_all()
    }

    fn insert(&self, listing: Listing) -> Result<Arc<Listing>, StoreError> {
        (**self).insert(listing)
    }
}
