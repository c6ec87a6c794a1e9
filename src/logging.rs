//! Tracing subscriber setup.

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber honoring `RUST_LOG`.
///
/// Falls back to `guidedrag=info`. Returns false when a global subscriber
/// was already installed, so repeated calls (e.g. from tests) are harmless.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
