//! Fungible registry
//!
//! In-memory, thread-safe symbol -> Fungible table. Registration is
//! idempotent: a symbol keeps the id it was first given.

use super::fungible::{validate_symbol, Fungible, FungibleId, FungibleResolver};
use crate::{Result, SchemaError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of fungibles supported
pub const MAX_FUNGIBLES: usize = 5000;

#[derive(Default)]
pub struct FungibleRegistry {
    by_symbol: RwLock<HashMap<Arc<str>, Fungible>>,
}

impl FungibleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding `symbols`
    pub fn initialize<S: AsRef<str>>(symbols: &[S]) -> Result<Self> {
        let registry = Self::new();
        for symbol in symbols {
            registry.register(symbol.as_ref())?;
        }
        tracing::info!("Fungible registry initialized with {} symbols", registry.len());
        Ok(registry)
    }

    /// Register `symbol`, or return the existing Fungible for it
    pub fn register(&self, symbol: &str) -> Result<Fungible> {
        validate_symbol(symbol)?;

        if let Some(existing) = self.by_symbol.read().get(symbol) {
            return Ok(existing.clone());
        }

        let mut table = self.by_symbol.write();
        // Re-check under the write lock, another thread may have won
        if let Some(existing) = table.get(symbol) {
            return Ok(existing.clone());
        }
        if table.len() >= MAX_FUNGIBLES {
            return Err(SchemaError::InvalidConfiguration(format!(
                "fungible capacity of {} exceeded",
                MAX_FUNGIBLES
            )));
        }

        let name: Arc<str> = Arc::from(symbol);
        let fungible = Fungible::new(FungibleId::from_raw(table.len() as u32), name.clone());
        table.insert(name, fungible.clone());
        tracing::debug!(symbol, id = fungible.id().as_raw(), "registered fungible");
        Ok(fungible)
    }

    pub fn len(&self) -> usize {
        self.by_symbol.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered symbols ordered by id
    pub fn symbols(&self) -> Vec<String> {
        let table = self.by_symbol.read();
        let mut all: Vec<&Fungible> = table.values().collect();
        all.sort_by_key(|f| f.id());
        all.into_iter().map(|f| f.symbol().to_string()).collect()
    }
}

impl FungibleResolver for FungibleRegistry {
    fn resolve(&self, symbol: &str) -> Option<Fungible> {
        self.by_symbol.read().get(symbol).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_registry_initialization() {
        let registry = FungibleRegistry::initialize(&["BTC", "USD", "ETH"]).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.symbols(), vec!["BTC", "USD", "ETH"]);
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = FungibleRegistry::new();
        let a = registry.register("BTC").unwrap();
        let b = registry.register("BTC").unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = FungibleRegistry::initialize(&["BTC", "USD"]).unwrap();
        assert_eq!(registry.resolve("BTC").unwrap().symbol(), "BTC");
        assert!(registry.resolve("XYZ").is_none());
        assert!(registry.resolve("btc").is_none());
    }

    #[test]
    fn test_rejects_bad_symbols() {
        let registry = FungibleRegistry::new();
        assert!(matches!(registry.register("BTC.USD"), Err(SchemaError::InvalidArgument(_))));
        assert!(registry.register("").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_register_same_symbol() {
        let registry = FungibleRegistry::new();
        let ids: Vec<FungibleId> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| registry.register("SOL").unwrap().id()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_capacity_limit() {
        let registry = FungibleRegistry::new();
        for i in 0..MAX_FUNGIBLES {
            registry.register(&format!("F{}", i)).unwrap();
        }
        assert_eq!(registry.len(), MAX_FUNGIBLES);

        assert!(matches!(
            registry.register("OVERFLOW"),
            Err(SchemaError::InvalidConfiguration(_))
        ));
        // Existing symbols still resolve at capacity
        assert_eq!(registry.register("F0").unwrap().id().as_raw(), 0);
        assert_eq!(registry.len(), MAX_FUNGIBLES);
    }
}
