//! Listing identity and get-or-create resolution
//!
//! A Listing is the tradable pair (base, quote). At most one exists per
//! pair for the lifetime of the store; it is created on first request and
//! never changes afterwards.
//!
//! Resolution order in [`ListingResolver::for_pair`]:
//! 1. resolver cache
//! 2. store lookup
//! 3. store insert
//! 4. on `UniquenessConflict` only, one more store lookup
//!
//! Every other store failure goes straight back to the caller.

use super::fungible::{Fungible, FungibleId, FungibleResolver};
use crate::infrastructure::metrics::ResolverMetrics;
use crate::store::{ListingStore, StoreError};
use crate::{Result, SchemaError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Separator between base and quote in a listing symbol
pub const SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ListingId(Uuid);

impl ListingId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Rebuild a persisted id
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique key of a listing: (base id, quote id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub base: FungibleId,
    pub quote: FungibleId,
}

impl PairKey {
    pub fn new(base: &Fungible, quote: &Fungible) -> Self {
        Self {
            base: base.id(),
            quote: quote.id(),
        }
    }
}

/// Tradable pair; equality and hashing follow the listing id
#[derive(Debug, Clone)]
pub struct Listing {
    id: ListingId,
    base: Fungible,
    quote: Fungible,
    symbol: String,
}

impl Listing {
    /// Fresh, unpersisted listing; only stores and the resolver should call this
    pub fn new(base: Fungible, quote: Fungible) -> Self {
        Self::from_parts(ListingId::new(), base, quote)
    }

    /// Listing loaded back from a store row under its saved id
    pub fn from_parts(id: ListingId, base: Fungible, quote: Fungible) -> Self {
        let symbol = format!("{}{}{}", base.symbol(), SEPARATOR, quote.symbol());
        Self {
            id,
            base,
            quote,
            symbol,
        }
    }

    pub fn id(&self) -> ListingId {
        self.id
    }

    pub fn base(&self) -> &Fungible {
        &self.base
    }

    pub fn quote(&self) -> &Fungible {
        &self.quote
    }

    /// `BASE.QUOTE`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.base, &self.quote)
    }
}

impl PartialEq for Listing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listing {}

impl Hash for Listing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Split `BASE.QUOTE` at the first separator
pub fn split_symbol(symbol: &str) -> Result<(&str, &str)> {
    symbol
        .split_once(SEPARATOR)
        .ok_or_else(|| SchemaError::InvalidArgument(format!("Invalid Listing symbol: {:?}", symbol)))
}

/// Get-or-create resolver for listings
pub struct ListingResolver<S, F> {
    store: S,
    fungibles: F,
    cache: RwLock<HashMap<PairKey, Arc<Listing>>>,
    metrics: ResolverMetrics,
}

impl<S: ListingStore, F: FungibleResolver> ListingResolver<S, F> {
    pub fn new(store: S, fungibles: F) -> Self {
        Self {
            store,
            fungibles,
            cache: RwLock::new(HashMap::new()),
            metrics: ResolverMetrics::new(),
        }
    }

    /// The unique listing for (base, quote), created if absent
    ///
    /// # Errors
    /// `Store` for backend failures, `StoreInconsistency` if the store
    /// reports a conflict but the conflicting listing cannot be read back.
    pub fn for_pair(&self, base: &Fungible, quote: &Fungible) -> Result<Arc<Listing>> {
        self.metrics.record_lookup();
        let key = PairKey::new(base, quote);

        if let Some(listing) = self.cache.read().get(&key) {
            self.metrics.record_cache_hit();
            return Ok(listing.clone());
        }

        let listing = match self.store.find(base, quote)? {
            Some(listing) => listing,
            None => self.create(base, quote)?,
        };

        Ok(self.cache.write().entry(key).or_insert(listing).clone())
    }

    /// Parse `BASE.QUOTE` and resolve the pair
    ///
    /// # Errors
    /// `InvalidArgument` if there is no separator or either side is unknown.
    pub fn for_symbol(&self, symbol: &str) -> Result<Arc<Listing>> {
        let (base_symbol, quote_symbol) = split_symbol(symbol)?;
        let base = self.fungibles.resolve(base_symbol).ok_or_else(|| {
            SchemaError::InvalidArgument(format!("Invalid base symbol: {:?}", base_symbol))
        })?;
        let quote = self.fungibles.resolve(quote_symbol).ok_or_else(|| {
            SchemaError::InvalidArgument(format!("Invalid quote symbol: {:?}", quote_symbol))
        })?;
        self.for_pair(&base, &quote)
    }

    /// Symbols of every stored listing, in store order
    pub fn all_symbols(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .find_all()?
            .iter()
            .map(|listing| listing.symbol().to_string())
            .collect())
    }

    pub fn metrics(&self) -> &ResolverMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fungibles(&self) -> &F {
        &self.fungibles
    }

    fn create(&self, base: &Fungible, quote: &Fungible) -> Result<Arc<Listing>> {
        match self.store.insert(Listing::new(base.clone(), quote.clone())) {
            Ok(listing) => {
                self.metrics.record_created();
                tracing::info!(symbol = listing.symbol(), id = %listing.id(), "created listing");
                Ok(listing)
            }
            Err(StoreError::UniquenessConflict { symbol }) => {
                self.metrics.record_conflict_recovered();
                tracing::warn!(%symbol, "listing created concurrently, re-reading");
                self.store.find(base, quote)?.ok_or_else(|| {
                    tracing::error!(%symbol, "uniqueness conflict but listing not found");
                    SchemaError::StoreInconsistency(format!(
                        "conflict on {} but no stored listing",
                        symbol
                    ))
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
