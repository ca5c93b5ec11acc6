//! Polymorphic amount over the discrete and decimal representations
//!
//! Comparison, equality and mixed arithmetic normalize both sides to
//! decimal. Only discrete + discrete with an equal basis stays discrete;
//! re-discretizing a decimal result is always an explicit [`Amount::to_basis`].

use super::{Basis, DecimalAmount, DiscreteAmount};
use crate::Result;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Price or volume amount
#[derive(Debug, Clone, Copy)]
pub enum Amount {
    Discrete(DiscreteAmount),
    Decimal(DecimalAmount),
}

impl Amount {
    /// Exact decimal value
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Self::Discrete(d) => d.to_decimal(),
            Self::Decimal(d) => d.value(),
        }
    }

    /// Lossy, for display only
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Discrete(d) => d.to_f64(),
            Self::Decimal(d) => d.to_f64(),
        }
    }

    /// Discretize against `basis`
    ///
    /// A discrete amount already at `basis` is returned as-is.
    pub fn to_basis(&self, basis: Basis) -> Result<DiscreteAmount> {
        match self {
            Self::Discrete(d) if d.basis() == basis => Ok(*d),
            _ => DiscreteAmount::from_decimal(self.to_decimal(), basis),
        }
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Discrete(a), Self::Discrete(b)) => a.checked_add(b),
            _ => decimal(self.to_decimal().checked_add(other.to_decimal())?),
        }
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Discrete(a), Self::Discrete(b)) => a.checked_sub(b),
            _ => decimal(self.to_decimal().checked_sub(other.to_decimal())?),
        }
    }

    /// Product is always decimal (price * volume has no basis of its own)
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        decimal(self.to_decimal().checked_mul(other.to_decimal())?)
    }

    /// Returns None on division by zero or overflow
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        decimal(self.to_decimal().checked_div(other.to_decimal())?)
    }

    pub fn checked_neg(&self) -> Option<Self> {
        match self {
            Self::Discrete(d) => Some(Self::Discrete(d.checked_neg()?)),
            Self::Decimal(d) => Some(Self::Decimal(DecimalAmount::new(-d.value()))),
        }
    }

    pub fn abs(&self) -> Option<Self> {
        if self.signum() < 0 {
            self.checked_neg()
        } else {
            Some(*self)
        }
    }

    pub fn signum(&self) -> i64 {
        match self {
            Self::Discrete(d) => d.signum(),
            Self::Decimal(d) if d.value().is_zero() => 0,
            Self::Decimal(d) if d.value().is_sign_negative() => -1,
            Self::Decimal(_) => 1,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }
}

fn decimal(value: Decimal) -> Option<Amount> {
    Some(Amount::Decimal(DecimalAmount::new(value)))
}

impl From<DiscreteAmount> for Amount {
    fn from(amount: DiscreteAmount) -> Self {
        Self::Discrete(amount)
    }
}

impl From<DecimalAmount> for Amount {
    fn from(amount: DecimalAmount) -> Self {
        Self::Decimal(amount)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Decimal(DecimalAmount::new(value))
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Amount {}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Discrete(a), Self::Discrete(b)) => a.cmp(b),
            // Same order DiscreteAmount::cmp uses for the discrete pair
            _ => self.to_decimal().cmp(&other.to_decimal()),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete(d) => fmt::Display::fmt(d, f),
            Self::Decimal(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn cents(count: i64) -> Amount {
        Amount::Discrete(DiscreteAmount::new(count, 100).unwrap())
    }

    #[test]
    fn test_mixed_equality() {
        let discrete = cents(12_346);
        let decimal = Amount::from(dec!(123.460));
        assert_eq!(discrete, decimal);
        assert_ne!(discrete, Amount::from(dec!(123.456)));
    }

    #[test]
    fn test_mixed_ordering() {
        assert!(cents(100) < Amount::from(dec!(1.001)));
        assert!(Amount::from(dec!(0.999)) < cents(100));

        let mut amounts = vec![Amount::from(dec!(2)), cents(150), Amount::from(dec!(-1))];
        amounts.sort();
        assert_eq!(amounts[0], Amount::from(dec!(-1)));
        assert_eq!(amounts[1], cents(150));
    }

    #[test]
    fn test_mixed_add_is_decimal() {
        let sum = cents(150).checked_add(&Amount::from(dec!(0.005))).unwrap();
        assert!(matches!(sum, Amount::Decimal(_)));
        assert_eq!(sum.to_decimal(), dec!(1.505));
    }

    #[test]
    fn test_discrete_add_stays_discrete() {
        let sum = cents(150).checked_add(&cents(1)).unwrap();
        assert!(matches!(sum, Amount::Discrete(d) if d.count() == 151));
    }

    #[test]
    fn test_to_basis_is_explicit() {
        let sum = cents(150).checked_add(&Amount::from(dec!(0.005))).unwrap();
        let cents_basis = Basis::new(100).unwrap();
        assert_eq!(sum.to_basis(cents_basis).unwrap().count(), 151);
        assert_eq!(cents(42).to_basis(cents_basis).unwrap().count(), 42);
        assert_eq!(cents(42).to_basis(Basis::new(10).unwrap()).unwrap().count(), 4);
    }

    #[test]
    fn test_mul_div() {
        let notional = cents(250).checked_mul(&Amount::from(dec!(4))).unwrap();
        assert_eq!(notional.to_decimal(), dec!(10));
        assert!(cents(1).checked_div(&Amount::from(Decimal::ZERO)).is_none());
        assert_eq!(
            cents(300).checked_div(&cents(150)).unwrap().to_decimal(),
            dec!(2)
        );
    }

    #[test]
    fn test_sign() {
        assert_eq!(cents(-5).abs().unwrap(), cents(5));
        assert_eq!(Amount::from(dec!(-0.5)).abs().unwrap(), Amount::from(dec!(0.5)));
        assert!(Amount::from(Decimal::ZERO).is_zero());
        assert_eq!(Amount::from(dec!(-2)).signum(), -1);
    }

    #[test]
    fn test_display() {
        assert_eq!(cents(12_346).to_string(), "123.46");
        assert_eq!(Amount::from(dec!(0.005)).to_string(), "0.005");
    }
}
