//! Tracing setup for test binaries

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber for the current test binary.
///
/// `RUST_LOG` wins over `default_filter`. Output goes through the test writer
/// so it is captured per test. Returns `false` if a subscriber was already
/// installed, which is expected when several suites share one binary.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init()
        .is_ok()
}
