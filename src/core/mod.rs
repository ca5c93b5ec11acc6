//! Core schema types
//!
//! This module contains the fundamental types used throughout the system:
//! - Basis: Smallest price/volume increment of an instrument
//! - DiscreteAmount / DecimalAmount / Amount: Exact amount model
//! - Fungible / FungibleRegistry: Asset identity by symbol
//! - Listing / ListingResolver: Get-or-create identity for traded pairs
//! - Market: Listing on a venue, supplies price and volume basis
//! - PriceData / Trade / Offer: Priced events with lazily derived amounts

pub mod amount;
pub mod basis;
pub mod decimal;
pub mod discrete;
pub mod fungible;
pub mod listing;
pub mod market;
pub mod market_data;
pub mod registry;

pub use amount::Amount;
pub use basis::{Basis, ROUNDING};
pub use decimal::DecimalAmount;
pub use discrete::DiscreteAmount;
pub use fungible::{Fungible, FungibleId, FungibleResolver};
pub use listing::{Listing, ListingId, ListingResolver, PairKey, SEPARATOR};
pub use market::{BasisProvider, Market};
pub use market_data::{Offer, PriceData, Priced, Side, Trade};
pub use registry::FungibleRegistry;
