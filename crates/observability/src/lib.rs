//! Tracing and logging setup shared by every binary and test harness that
//! embeds the larder crates.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::{DEFAULT_FILTER, init_with_default};
