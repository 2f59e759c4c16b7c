//! Test helpers shared by the lexattr crates.

use std::sync::Once;

use tracing_subscriber::filter::EnvFilter;

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_TEST_DIRECTIVES: &str = "info";

static INIT: Once = Once::new();

/// Install the test subscriber with [`DEFAULT_TEST_DIRECTIVES`].
pub fn init_tracing_for_tests() {
    init_tracing_with_default(DEFAULT_TEST_DIRECTIVES);
}

/// Install a `fmt` subscriber that writes through the libtest capture.
///
/// Only the first call in a test binary has an effect; its `fallback`
/// directives apply whenever `RUST_LOG` is missing or malformed. A subscriber
/// installed elsewhere is left in place.
pub fn init_tracing_with_default(fallback: &str) {
    INIT.call_once(|| {
        let filter = test_filter(std::env::var("RUST_LOG").ok().as_deref(), fallback);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

fn test_filter(env: Option<&str>, fallback: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
