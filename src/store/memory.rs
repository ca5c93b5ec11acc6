//! In-memory listing store
//!
//! Unique index on (base id, quote id), checked and written under one
//! write lock so concurrent inserts of the same pair see exactly one winner.

use super::{ListingStore, StoreError};
use crate::core::{Fungible, Listing, PairKey};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct Tables {
    by_pair: HashMap<PairKey, Arc<Listing>>,
    /// Insertion order, for `find_all`
    rows: Vec<Arc<Listing>>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListingStore for MemoryStore {
    fn find(&self, base: &Fungible, quote: &Fungible) -> Result<Option<Arc<Listing>>, StoreError> {
        let key = PairKey::new(base, quote);
        Ok(self.tables.read().by_pair.get(&key).cloned())
    }

    fn find_all(&self) -> Result<Vec<Arc<Listing>>, StoreError> {
        Ok(self.tables.read().rows.clone())
    }

    fn insert(&self, listing: Listing) -> Result<Arc<Listing>, StoreError> {
        let key = listing.key();
        let mut tables = self.tables.write();
        if tables.by_pair.contains_key(&key) {
            return Err(StoreError::UniquenessConflict {
                symbol: listing.symbol().to_string(),
            });
        }
        let stored = Arc::new(listing);
        tables.by_pair.insert(key, stored.clone());
        tables.rows.push(stored.clone());
        Ok(stored)
    }
}
