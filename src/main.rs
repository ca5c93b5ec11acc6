//! Listing bootstrap for multi-venue price/volume tracking
//!
//! # Architecture
//! - **core**: Amount model (Basis, DiscreteAmount, DecimalAmount), Fungible and Listing identity, priced events
//! - **store**: Durable store seam (ListingStore) and the in-memory store
//! - **infrastructure**: Cold path (config, logging, metrics)
//!
//! Loads config.toml, registers the configured fungibles, resolves every
//! configured market's listing and prints the registered listing symbols.

use market_schema::core::{BasisProvider, FungibleRegistry, ListingResolver, Market};
use market_schema::infrastructure::{config::Config, init_logging};
use market_schema::store::MemoryStore;
use market_schema::{log_store, Result};
use std::sync::Arc;
use tracing::Level;

/// Main application state
pub struct App {
    config: Config,
    resolver: ListingResolver<MemoryStore, Arc<FungibleRegistry>>,
}

impl App {
    /// Create new application instance
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fungibles = Arc::new(FungibleRegistry::initialize(&config.fungibles)?);
        let resolver = ListingResolver::new(MemoryStore::new(), fungibles);
        Ok(Self { config, resolver })
    }

    /// Resolve configured markets and report the registered listings
    pub fn run(&self) -> Result<Vec<Arc<Market>>> {
        let mut markets = Vec::with_capacity(self.config.markets.len());
        for entry in &self.config.markets {
            let listing = self.resolver.for_symbol(&entry.listing)?;
            let market = Market::new(
                entry.exchange.clone(),
                listing,
                entry.price_basis,
                entry.volume_basis,
            )?;
            tracing::info!(
                market = %market,
                price_unit = %market.price_basis().unit(),
                "market ready"
            );
            markets.push(Arc::new(market));
        }

        let symbols = self.resolver.all_symbols()?;
        let metrics = self.resolver.metrics().snapshot();
        log_store!(
            Level::INFO,
            listings = symbols.len(),
            created = metrics.created,
            conflicts = metrics.conflicts_recovered,
            "listings resolved"
        );
        for symbol in &symbols {
            println!("{}", symbol);
        }
        Ok(markets)
    }
}

fn main() -> Result<()> {
    let config = Config::load()?;
    let _guards = init_logging(&config.logging)?;

    let app = App::new(config)?;
    let markets = app.run()?;
    tracing::info!("{} markets configured", markets.len());

    Ok(())
}
