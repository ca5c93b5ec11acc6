//! Amount stored as an exact integer count of basis units
//!
//! Copy type, no panics. Same-basis arithmetic is integer arithmetic on
//! counts; anything else falls back to decimal and yields a
//! [`DecimalAmount`](crate::core::DecimalAmount).

use super::{Amount, Basis, DecimalAmount};
use crate::Result;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// `count` units of `1 / basis`
#[derive(Debug, Clone, Copy)]
pub struct DiscreteAmount {
    count: i64,
    basis: Basis,
}

impl DiscreteAmount {
    /// Create from a raw count and basis denominator
    ///
    /// # Errors
    /// `InvalidConfiguration` if `basis <= 0`.
    pub fn new(count: i64, basis: i64) -> Result<Self> {
        Ok(Self::with_basis(count, Basis::new(basis)?))
    }

    #[inline(always)]
    pub const fn with_basis(count: i64, basis: Basis) -> Self {
        Self { count, basis }
    }

    /// Discretize a decimal value with the crate-wide rounding rule
    pub fn from_decimal(value: Decimal, basis: Basis) -> Result<Self> {
        Ok(Self::with_basis(basis.count_for(value)?, basis))
    }

    #[inline(always)]
    pub const fn count(&self) -> i64 {
        self.count
    }

    #[inline(always)]
    pub const fn basis(&self) -> Basis {
        self.basis
    }

    pub fn to_decimal(&self) -> Decimal {
        self.basis.decimal_of(self.count)
    }

    /// Lossy, for display and statistics only
    pub fn to_f64(&self) -> f64 {
        self.to_decimal().to_f64().unwrap_or(f64::NAN)
    }

    /// One basis unit up - returns None on overflow
    pub fn increment(&self) -> Option<Self> {
        Some(Self::with_basis(self.count.checked_add(1)?, self.basis))
    }

    /// One basis unit down - returns None on overflow
    pub fn decrement(&self) -> Option<Self> {
        Some(Self::with_basis(self.count.checked_sub(1)?, self.basis))
    }

    /// Checked addition - returns None on overflow
    ///
    /// Equal bases stay discrete, differing bases produce a decimal amount.
    pub fn checked_add(&self, other: &Self) -> Option<Amount> {
        if self.basis == other.basis {
            let count = self.count.checked_add(other.count)?;
            return Some(Amount::Discrete(Self::with_basis(count, self.basis)));
        }
        let value = self.to_decimal().checked_add(other.to_decimal())?;
        Some(Amount::Decimal(DecimalAmount::new(value)))
    }

    /// Checked subtraction - returns None on overflow
    pub fn checked_sub(&self, other: &Self) -> Option<Amount> {
        if self.basis == other.basis {
            let count = self.count.checked_sub(other.count)?;
            return Some(Amount::Discrete(Self::with_basis(count, self.basis)));
        }
        let value = self.to_decimal().checked_sub(other.to_decimal())?;
        Some(Amount::Decimal(DecimalAmount::new(value)))
    }

    /// Checked negation - returns None on overflow (i64::MIN)
    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self::with_basis(self.count.checked_neg()?, self.basis))
    }

    #[inline(always)]
    pub const fn signum(&self) -> i64 {
        self.count.signum()
    }

    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.count == 0
    }
}

impl PartialEq for DiscreteAmount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DiscreteAmount {}

impl PartialOrd for DiscreteAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiscreteAmount {
    /// Orders by normalized decimal value, same as [`Amount`]
    ///
    /// Counts are only compared directly when the shared basis is a power of
    /// ten, where the decimal is exact and the two orders coincide.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.basis == other.basis && self.basis.decimal_places().is_some() {
            return self.count.cmp(&other.count);
        }
        self.to_decimal().cmp(&other.to_decimal())
    }
}

impl fmt::Display for DiscreteAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
