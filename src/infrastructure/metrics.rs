//! Metrics collection for the listing resolver
//!
//! Lock-free counters using atomic operations.
//! Updated on every resolution, read through snapshots.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Resolver metrics collector
pub struct ResolverMetrics {
    /// Total `for_pair` calls (including those made by `for_symbol`)
    lookups: AtomicU64,
    /// Lookups answered from the resolver cache
    cache_hits: AtomicU64,
    /// Listings this process inserted into the store
    created: AtomicU64,
    /// Uniqueness conflicts resolved by re-reading the store
    conflicts_recovered: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

/// Metrics snapshot for export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub lookups: u64,
    pub cache_hits: u64,
    pub created: u64,
    pub conflicts_recovered: u64,
    pub hit_rate: f64,
    pub uptime_seconds: u64,
}

impl ResolverMetrics {
    pub fn new() -> Self {
        Self {
            lookups: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            created: AtomicU64::new(0),
            conflicts_recovered: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    #[inline]
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_conflict_recovered(&self) {
        self.conflicts_recovered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let hit_rate = if lookups > 0 {
            cache_hits as f64 / lookups as f64
        } else {
            0.0
        };

        MetricsSnapshot {
            lookups,
            cache_hits,
            created: self.created.load(Ordering::Relaxed),
            conflicts_recovered: self.conflicts_recovered.load(Ordering::Relaxed),
            hit_rate,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for ResolverMetrics {
    fn default() -> Self {
        Self::new()
    }
}
