//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize JSON logging filtered by `RUST_LOG` (default [`DEFAULT_FILTER`]).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`], but with a caller-chosen fallback filter (e.g.
/// `"larder_inventory=debug"` in tests).
///
/// Returns `true` if this call installed the global subscriber; `false` when
/// one was already set, in which case nothing changes.
pub fn init_with_default(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_init_installs_a_subscriber() {
        init();
        assert!(!init_with_default("debug"));
    }
}
