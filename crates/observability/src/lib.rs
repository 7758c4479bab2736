//! `shelflife-observability` — tracing subscriber wiring.
//!
//! Binaries and test harnesses call [`init`] once at startup; the domain
//! crates only emit events and never touch subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber, filtered by `RUST_LOG` when set
/// and at `info` otherwise.
pub fn init() {
    init_with_default("info");
}

/// Like [`init`], with an explicit filter to fall back on when `RUST_LOG`
/// is unset. Safe to call more than once: later calls keep the subscriber
/// already installed.
pub fn init_with_default(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
