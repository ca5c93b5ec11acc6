//! Infrastructure - cold path only
//!
//! This module contains non-latency-critical code:
//! - Configuration management
//! - Logging
//! - Resolver metrics

pub mod config;
pub mod logging;
pub mod metrics;

pub use config::{Config, LoggingConfig, MarketConfig};
pub use logging::init_logging;
pub use metrics::{MetricsSnapshot, ResolverMetrics};
