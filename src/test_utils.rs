//! Test fixtures for registries, resolvers and markets
//!
//! Every call builds fresh state so tests never share listings.

use crate::core::{FungibleRegistry, ListingResolver, Market};
use crate::store::MemoryStore;
use std::sync::Arc;

pub const TEST_FUNGIBLES: [&str; 6] = ["BTC", "USD", "ETH", "EUR", "SOL", "USDT"];

/// Registry holding all test fungibles
pub fn init_test_registry() -> Arc<FungibleRegistry> {
    Arc::new(FungibleRegistry::initialize(&TEST_FUNGIBLES).expect("test fungibles are valid"))
}

/// Resolver over an empty in-memory store
pub fn test_resolver() -> ListingResolver<MemoryStore, Arc<FungibleRegistry>> {
    ListingResolver::new(MemoryStore::new(), init_test_registry())
}

/// BITSTAMP:BTC.USD with the given bases
pub fn test_market(price_basis: i64, volume_basis: i64) -> Arc<Market> {
    let listing = test_resolver()
        .for_symbol("BTC.USD")
        .expect("BTC.USD resolves");
    Arc::new(Market::new("BITSTAMP", listing, price_basis, volume_basis).expect("valid bases"))
}
