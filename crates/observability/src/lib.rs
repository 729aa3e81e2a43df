//! Tracing and logging setup shared by stockroom binaries.

pub mod config;
/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
