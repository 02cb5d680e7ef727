//! Tracing and logging (shared setup).
//!
//! The engines only emit `tracing` events; whoever embeds them decides where
//! those go. This crate is the default answer for binaries and test suites.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}

/// Initialize a subscriber that writes through the test harness' capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test() {
    tracing::init_test();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig};
