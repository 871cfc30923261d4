//! Logging setup for the recordings crates.
//!
//! Logging is off unless asked for through the environment:
//!
//! - `RECORDINGS_DEBUG=true` (or `1`, `yes`) - enable debug logging
//! - `RECORDINGS_LOG_LEVEL=trace|debug|info|warn|error` - set a specific level
//! - `RECORDINGS_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! Log lines go to stderr so they never interleave with results printed on
//! stdout.
//!
//! Within the crates, use the standard tracing macros:
//!
//! ```rust,ignore
//! use tracing::{debug, info};
//!
//! info!(host = %config.host, "Connected to MySQL");
//! debug!(sql = %sql, "Executing query");
//! ```

use std::env;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Crates whose spans and events the filter lets through.
const TARGETS: [&str; 4] = [
    "recordings",
    "recordings_store",
    "recordings_mysql",
    "recordings_sqlite",
];

/// Check if debug logging is enabled via `RECORDINGS_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("RECORDINGS_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Resolve a log level from a `RECORDINGS_LOG_LEVEL` value.
///
/// Unknown or missing values fall back to "debug" when debug logging is
/// enabled and "warn" otherwise.
pub fn resolve_level(level: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match level.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

/// Resolve an output format from a `RECORDINGS_LOG_FORMAT` value.
pub fn resolve_format(format: Option<&str>) -> &'static str {
    match format.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Get the configured log level.
pub fn get_log_level() -> &'static str {
    resolve_level(env::var("RECORDINGS_LOG_LEVEL").ok().as_deref(), is_debug_enabled())
}

/// Get the configured log format.
pub fn get_log_format() -> &'static str {
    resolve_format(env::var("RECORDINGS_LOG_FORMAT").ok().as_deref())
}

/// Build the filter directive for `level`, e.g. `recordings=info,recordings_store=info,...`.
pub fn filter_directive(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize logging.
///
/// Call once at startup; later calls are no-ops. Does nothing when neither
/// `RECORDINGS_DEBUG` nor `RECORDINGS_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("RECORDINGS_LOG_LEVEL").is_err() {
            return;
        }

        let level = get_log_level();
        let filter =
            EnvFilter::try_new(filter_directive(level)).unwrap_or_else(|_| EnvFilter::new("warn"));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = match get_log_format() {
            "pretty" => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            "compact" => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
            _ => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };

        if installed.is_ok() {
            tracing::info!(
                level = level,
                format = get_log_format(),
                "Recordings logging initialized"
            );
        }
    });
}
