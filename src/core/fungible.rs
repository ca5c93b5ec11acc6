//! Asset/currency identity
//!
//! A Fungible is a registered symbol (BTC, USD, ...) with a small numeric
//! id handed out by the registry. Identity is the id; the symbol is kept
//! for formatting.

use crate::core::listing::SEPARATOR;
use crate::{Result, SchemaError};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FungibleId(u32);

impl FungibleId {
    #[inline(always)]
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fungible {
    id: FungibleId,
    symbol: Arc<str>,
}

impl Fungible {
    pub(crate) fn new(id: FungibleId, symbol: Arc<str>) -> Self {
        Self { id, symbol }
    }

    #[inline(always)]
    pub const fn id(&self) -> FungibleId {
        self.id
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Fungible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Symbol -> Fungible lookup
pub trait FungibleResolver: Send + Sync {
    /// Returns None for symbols that are not registered
    fn resolve(&self, symbol: &str) -> Option<Fungible>;
}

impl<T: FungibleResolver + ?Sized> FungibleResolver for Arc<T> {
    fn resolve(&self, symbol: &str) -> Option<Fungible> {
        (**self).resolve(symbol)
    }
}

/// Reject symbols that could not round-trip through `BASE.QUOTE`
pub fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(SchemaError::InvalidArgument("empty fungible symbol".to_string()));
    }
    if symbol.contains(SEPARATOR) || symbol.chars().any(char::is_whitespace) {
        return Err(SchemaError::InvalidArgument(format!(
            "invalid fungible symbol: {:?}",
            symbol
        )));
    }
    Ok(())
}
