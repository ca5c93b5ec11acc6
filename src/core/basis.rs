//! Instrument basis and decimal <-> count conversion
//!
//! A basis is the positive denominator `b` of an instrument's smallest
//! increment: real value = count / b, unit = 1 / b. A price unit of 0.01
//! is basis 100.
//!
//! Every decimal -> count path in the crate goes through [`Basis::count_for`]
//! and therefore rounds with [`ROUNDING`]. The count -> decimal direction is
//! exact for any basis that divides a power of ten.

use crate::{Result, SchemaError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Round to nearest, ties away from zero (half-up on magnitude).
///
/// 0.125 at basis 100 becomes 13, -0.125 becomes -13.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Positive denominator of an instrument's price or volume increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Basis(i64);

impl Basis {
    /// Whole units (increment of 1)
    pub const ONE: Self = Self(1);

    /// Create a basis, rejecting zero and negative denominators
    pub fn new(denominator: i64) -> Result<Self> {
        if denominator <= 0 {
            return Err(SchemaError::InvalidConfiguration(format!(
                "basis must be positive, got {}",
                denominator
            )));
        }
        Ok(Self(denominator))
    }

    /// Get raw denominator
    #[inline(always)]
    pub const fn denominator(&self) -> i64 {
        self.0
    }

    /// Smallest representable increment (1 / basis)
    pub fn unit(&self) -> Decimal {
        Decimal::ONE / Decimal::from(self.0)
    }

    /// Number of decimal places if the basis is an exact power of ten
    pub fn decimal_places(&self) -> Option<u32> {
        let mut rest = self.0;
        let mut places = 0;
        while rest % 10 == 0 {
            rest /= 10;
            places += 1;
        }
        (rest == 1).then_some(places)
    }

    /// Nearest integer count representing `value` at this basis
    ///
    /// # Errors
    /// `Overflow` if the rounded count does not fit in i64.
    pub fn count_for(&self, value: Decimal) -> Result<i64> {
        let scaled = value
            .checked_mul(Decimal::from(self.0))
            .ok_or_else(|| overflow(value, *self))?;
        scaled
            .round_dp_with_strategy(0, ROUNDING)
            .to_i64()
            .ok_or_else(|| overflow(value, *self))
    }

    /// Same as [`Basis::count_for`] but passes an unknown value through as `None`
    pub fn rounded_count_for(&self, value: Option<Decimal>) -> Result<Option<i64>> {
        value.map(|v| self.count_for(v)).transpose()
    }

    /// Decimal value of `count` units at this basis
    pub fn decimal_of(&self, count: i64) -> Decimal {
        match self.decimal_places() {
            // i64 holds at most 10^18, well inside Decimal's 28 digit scale
            Some(scale) => Decimal::new(count, scale),
            None => Decimal::from(count) / Decimal::from(self.0),
        }
    }
}

impl TryFrom<i64> for Basis {
    type Error = SchemaError;

    fn try_from(denominator: i64) -> Result<Self> {
        Self::new(denominator)
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.0)
    }
}

fn overflow(value: Decimal, basis: Basis) -> SchemaError {
    SchemaError::Overflow(format!("{} does not fit an i64 count at basis {}", value, basis))
}
