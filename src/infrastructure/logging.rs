//! File + console logging
//!
//! Writes logs to the configured directory, separated by log type:
//! - <dir>/main - All application logs
//! - <dir>/error - Error and warning logs only
//! - <dir>/store - Listing resolution and store logs

use super::config::LoggingConfig;
use crate::Result;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log sub-directories created under the configured directory
pub const LOG_TYPES: [&str; 3] = ["main", "error", "store"];

/// Initialize console and rolling file logging
///
/// Returns the WorkerGuards, which must be kept alive for the duration of the program.
/// # Errors
/// `Io` if the log directories cannot be created.
pub fn init_logging(config: &LoggingConfig) -> Result<Vec<WorkerGuard>> {
    let logs_dir = config.directory.as_path();
    create_log_dirs(logs_dir)?;

    let mut guards = Vec::new();

    let (main_appender, main_guard) = create_appender(logs_dir, "main");
    guards.push(main_guard);

    let (error_appender, error_guard) = create_appender(logs_dir, "error");
    guards.push(error_guard);

    let (store_appender, store_guard) = create_appender(logs_dir, "store");
    guards.push(store_guard);

    // Main log - all logs, JSON lines if configured
    let main_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .with_writer(main_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(main_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    };

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(LevelFilter::WARN);

    let store_layer = tracing_subscriber::fmt::layer()
        .with_writer(store_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter_fn(|metadata| is_store_target(metadata.target())));

    // Console layer for development
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(main_layer)
        .with(error_layer)
        .with(store_layer)
        .with(console_layer)
        .init();

    tracing::info!(
        "Logging system initialized. Log files in {} directory",
        logs_dir.display()
    );

    Ok(guards)
}

/// Create one sub-directory per entry in [`LOG_TYPES`]
pub fn create_log_dirs(dir: &Path) -> Result<()> {
    for log_type in &LOG_TYPES {
        fs::create_dir_all(dir.join(log_type))?;
    }
    Ok(())
}

/// Targets routed to the store log
fn is_store_target(target: &str) -> bool {
    target == "store" || target.contains("listing") || target.contains("store::")
}

/// Create a daily rolling file appender
fn create_appender(dir: &Path, name: &str) -> (NonBlocking, WorkerGuard) {
    let appender = RollingFileAppender::new(Rotation::DAILY, dir.join(name), name);
    tracing_appender::non_blocking(appender)
}

/// Log to the store log from outside the listing/store modules
#[macro_export]
macro_rules! log_store {
    ($level:expr, $($arg:tt)+) => {
        tracing::event!(target: "store", $level, $($arg)+)
    };
}
