//! Amount stored exactly as entered, independent of any basis

use super::{Basis, DiscreteAmount};
use crate::{Result, SchemaError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Exact decimal amount
///
/// Equality and ordering follow the numeric value, so `1.5 == 1.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct DecimalAmount(Decimal);

impl DecimalAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline(always)]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Lossy, for display and statistics only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Re-discretize against `basis` with the crate-wide rounding rule
    pub fn to_discrete(&self, basis: Basis) -> Result<DiscreteAmount> {
        DiscreteAmount::from_decimal(self.0, basis)
    }

    /// Count for an optional decimal at `basis`; an unknown value stays unknown
    pub fn rounded_count_for_basis(value: Option<Decimal>, basis: Basis) -> Result<Option<i64>> {
        basis.rounded_count_for(value)
    }
}

impl From<Decimal> for DecimalAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<DecimalAmount> for Decimal {
    fn from(amount: DecimalAmount) -> Self {
        amount.0
    }
}

impl FromStr for DecimalAmount {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::from_str_exact(s.trim())
            .map(Self)
            .map_err(|e| SchemaError::InvalidArgument(format!("invalid amount {:?}: {}", s, e)))
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
