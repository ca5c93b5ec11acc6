//! Market: a listing traded on one venue
//!
//! The market is the basis provider for every priced event recorded on it.
//! Its bases are fixed at construction; there is no way to change them
//! once events reference the market.

use super::{Basis, Listing};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// Supplies the price and volume basis for events on an instrument
pub trait BasisProvider {
    fn price_basis(&self) -> Basis;
    fn volume_basis(&self) -> Basis;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    exchange: String,
    listing: Arc<Listing>,
    price_basis: Basis,
    volume_basis: Basis,
}

impl Market {
    /// # Errors
    /// `InvalidConfiguration` if either basis is not positive.
    pub fn new(
        exchange: impl Into<String>,
        listing: Arc<Listing>,
        price_basis: i64,
        volume_basis: i64,
    ) -> Result<Self> {
        Ok(Self {
            exchange: exchange.into(),
            listing,
            price_basis: Basis::new(price_basis)?,
            volume_basis: Basis::new(volume_basis)?,
        })
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn listing(&self) -> &Arc<Listing> {
        &self.listing
    }

    /// `EXCHANGE:BASE.QUOTE`
    pub fn symbol(&self) -> String {
        format!("{}:{}", self.exchange, self.listing.symbol())
    }
}

impl BasisProvider for Market {
    #[inline(always)]
    fn price_basis(&self) -> Basis {
        self.price_basis
    }

    #[inline(always)]
    fn volume_basis(&self) -> Basis {
        self.volume_basis
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.listing)
    }
}
