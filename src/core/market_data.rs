//! Priced market events
//!
//! PriceData is the shared body of any event carrying a price and/or
//! volume (trades, book offers). Only the integer counts are stored; the
//! DiscreteAmount views are derived from the counts and the market's
//! basis on first access and memoized on the event.
//!
//! The memoized value is a pure function of (count, basis), both fixed for
//! the event's lifetime, so concurrent readers always observe the same
//! amount. A market's basis is assumed immutable once events reference it.

use super::{Basis, BasisProvider, DecimalAmount, DiscreteAmount, Market};
use crate::Result;
use rust_decimal::Decimal;
use std::sync::{Arc, OnceLock};
use time::OffsetDateTime;

/// Common body of priced events
#[derive(Debug, Clone)]
pub struct PriceData {
    /// When the event happened on the venue
    time: OffsetDateTime,
    /// When this process received it
    time_received: OffsetDateTime,
    /// Venue's unique id for the event, used to drop duplicates
    remote_key: Option<String>,
    market: Arc<Market>,
    /// Relative to the market's price basis
    price_count: Option<i64>,
    /// Relative to the market's volume basis
    volume_count: Option<i64>,
    price: OnceLock<DiscreteAmount>,
    volume: OnceLock<DiscreteAmount>,
}

impl PriceData {
    /// Create from already discretized counts
    pub fn from_counts(
        time: OffsetDateTime,
        remote_key: Option<String>,
        market: Arc<Market>,
        price_count: Option<i64>,
        volume_count: Option<i64>,
    ) -> Self {
        Self {
            time,
            time_received: OffsetDateTime::now_utc(),
            remote_key,
            market,
            price_count,
            volume_count,
            price: OnceLock::new(),
            volume: OnceLock::new(),
        }
    }

    /// Create from decimal feed values, rounding against the market's bases
    ///
    /// # Errors
    /// `Overflow` if a value does not fit an i64 count at its basis.
    pub fn from_decimals(
        time: OffsetDateTime,
        remote_key: Option<String>,
        market: Arc<Market>,
        price: Option<Decimal>,
        volume: Option<Decimal>,
    ) -> Result<Self> {
        let price_count = DecimalAmount::rounded_count_for_basis(price, market.price_basis())?;
        let volume_count = DecimalAmount::rounded_count_for_basis(volume, market.volume_basis())?;
        Ok(Self::from_counts(time, remote_key, market, price_count, volume_count))
    }

    pub fn with_time_received(mut self, time_received: OffsetDateTime) -> Self {
        self.time_received = time_received;
        self
    }

    pub fn time(&self) -> OffsetDateTime {
        self.time
    }

    pub fn time_received(&self) -> OffsetDateTime {
        self.time_received
    }

    pub fn remote_key(&self) -> Option<&str> {
        self.remote_key.as_deref()
    }

    pub fn market(&self) -> &Arc<Market> {
        &self.market
    }

    pub fn price_count(&self) -> Option<i64> {
        self.price_count
    }

    pub fn volume_count(&self) -> Option<i64> {
        self.volume_count
    }
}

fn materialize(
    cell: &OnceLock<DiscreteAmount>,
    count: Option<i64>,
    basis: impl FnOnce() -> Basis,
) -> Option<DiscreteAmount> {
    let count = count?;
    Some(*cell.get_or_init(|| DiscreteAmount::with_basis(count, basis())))
}

/// Price and volume views of a priced event
///
/// A missing count means "not recorded": every accessor returns None for it.
pub trait Priced {
    fn price_data(&self) -> &PriceData;

    fn price(&self) -> Option<DiscreteAmount> {
        let data = self.price_data();
        materialize(&data.price, data.price_count, || data.market.price_basis())
    }

    fn price_as_f64(&self) -> Option<f64> {
        self.price().map(|p| p.to_f64())
    }

    fn price_as_decimal(&self) -> Option<Decimal> {
        self.price().map(|p| p.to_decimal())
    }

    fn volume(&self) -> Option<DiscreteAmount> {
        let data = self.price_data();
        materialize(&data.volume, data.volume_count, || data.market.volume_basis())
    }

    fn volume_as_f64(&self) -> Option<f64> {
        self.volume().map(|v| v.to_f64())
    }

    fn volume_as_decimal(&self) -> Option<Decimal> {
        self.volume().map(|v| v.to_decimal())
    }

    /// price * volume; None if either is missing or the product overflows
    fn notional(&self) -> Option<DecimalAmount> {
        let price = self.price_as_decimal()?;
        let volume = self.volume_as_decimal()?;
        Some(DecimalAmount::new(price.checked_mul(volume)?))
    }
}

impl Priced for PriceData {
    #[inline(always)]
    fn price_data(&self) -> &PriceData {
        self
    }
}

/// Trade/offer side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Side {
    Buy = 1,
    Sell = 2,
}

impl Side {
    /// Parse side from feed text
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b"BUY" | b"buy" | b"Buy" | b"BID" | b"bid" | b"Bid" => Some(Self::Buy),
            b"SELL" | b"sell" | b"Sell" | b"ASK" | b"ask" | b"Ask" => Some(Self::Sell),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    #[inline(always)]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

/// Executed trade
#[derive(Debug, Clone)]
pub struct Trade {
    data: PriceData,
    /// Aggressor side when the venue reports it
    side: Option<Side>,
}

impl Trade {
    pub fn new(data: PriceData, side: Option<Side>) -> Self {
        Self { data, side }
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }
}

impl Priced for Trade {
    #[inline(always)]
    fn price_data(&self) -> &PriceData {
        &self.data
    }
}

/// Resting book offer (bid or ask)
#[derive(Debug, Clone)]
pub struct Offer {
    data: PriceData,
    side: Side,
}

impl Offer {
    pub fn new(data: PriceData, side: Side) -> Self {
        Self { data, side }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_bid(&self) -> bool {
        self.side.is_buy()
    }
}

impl Priced for Offer {
    #[inline(always)]
    fn price_data(&self) -> &PriceData {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_market;
    use rust_decimal_macros::dec;
    use std::thread;
    use time::macros::datetime;

    const T0: OffsetDateTime = datetime!(2024-01-02 03:04:05 UTC);

    #[test]
    fn test_decimal_feed_is_discretized() {
        let market = test_market(100, 100_000_000);
        let data = PriceData::from_decimals(
            T0,
            Some("t-1".to_string()),
            market,
            Some(dec!(123.456)),
            Some(dec!(0.123456789)),
        )
        .unwrap();

        assert_eq!(data.price_count(), Some(12_346));
        assert_eq!(data.volume_count(), Some(12_345_679));
        assert_eq!(data.price_as_decimal(), Some(dec!(123.46)));
        assert_eq!(data.price_as_decimal().unwrap().to_string(), "123.46");
        assert_eq!(data.volume_as_decimal(), Some(dec!(0.12345679)));
        assert_eq!(data.remote_key(), Some("t-1"));
    }

    #[test]
    fn test_missing_counts_propagate() {
        let market = test_market(100, 1_000);
        let data = PriceData::from_counts(T0, None, market, None, Some(5));

        assert!(data.price().is_none());
        assert!(data.price_as_f64().is_none());
        assert!(data.price_as_decimal().is_none());
        assert!(data.notional().is_none());
        assert_eq!(data.volume_as_decimal(), Some(dec!(0.005)));
        assert!(data.price.get().is_none());
    }

    #[test]
    fn test_missing_decimals_propagate() {
        let market = test_market(100, 1_000);
        let data = PriceData::from_decimals(T0, None, market, None, None).unwrap();
        assert_eq!(data.price_count(), None);
        assert_eq!(data.volume_count(), None);
        assert!(data.volume().is_none());
    }

    #[test]
    fn test_price_is_memoized() {
        let market = test_market(100, 1_000);
        let data = PriceData::from_counts(T0, None, market, Some(250), Some(4_000));

        assert!(data.price.get().is_none());
        let first = data.price().unwrap();
        assert!(data.price.get().is_some());
        let second = data.price().unwrap();
        assert_eq!(first.count(), second.count());
        assert_eq!(first.basis(), second.basis());
        assert_eq!(data.notional().unwrap().value(), dec!(10));
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let market = test_market(100, 1_000);
        let data = Arc::new(PriceData::from_counts(T0, None, market, Some(12_346), Some(1)));

        let prices: Vec<Decimal> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let data = data.clone();
                    s.spawn(move || data.price_as_decimal().unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(prices.iter().all(|p| *p == dec!(123.46)));
    }

    #[test]
    fn test_overflowing_decimal_rejected() {
        let market = test_market(100_000_000, 1);
        let result = PriceData::from_decimals(
            T0,
            None,
            market,
            Some(Decimal::from(1_000_000_000_000i64)),
            None,
        );
        assert!(matches!(result, Err(crate::SchemaError::Overflow(_))));
    }

    #[test]
    fn test_time_received() {
        let market = test_market(100, 1);
        let later = datetime!(2024-01-02 03:04:06 UTC);
        let data = PriceData::from_counts(T0, None, market, Some(1), None).with_time_received(later);
        assert_eq!(data.time(), T0);
        assert_eq!(data.time_received(), later);
    }

    #[test]
    fn test_trade_and_offer() {
        let market = test_market(100, 100);
        let trade = Trade::new(
            PriceData::from_counts(T0, Some("42".to_string()), market.clone(), Some(10_000), Some(150)),
            Side::from_bytes(b"sell"),
        );
        assert_eq!(trade.side(), Some(Side::Sell));
        assert_eq!(trade.price_as_decimal(), Some(dec!(100)));
        assert_eq!(trade.volume_as_f64(), Some(1.5));

        let offer = Offer::new(
            PriceData::from_counts(T0, None, market, Some(9_999), None),
            Side::Buy,
        );
        assert!(offer.is_bid());
        assert_eq!(offer.price().unwrap().to_string(), "99.99");
        assert!(offer.volume().is_none());
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!(Side::from_bytes(b"BUY"), Some(Side::Buy));
        assert_eq!(Side::from_bytes(b"ask"), Some(Side::Sell));
        assert_eq!(Side::from_bytes(b"hold"), None);
        assert!(Side::Buy.is_buy());
        assert!(Side::Sell.is_sell());
    }
}
