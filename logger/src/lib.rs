//! The `logger` module configures `env_logger` for TRv1 binaries and tests.
//!
//! Every entry point is idempotent: the first call installs the global logger
//! and later calls are ignored, so test functions can each call [`setup`]
//! without coordinating.

use {
    env_logger::{Builder, Env},
    std::sync::Once,
};

static INIT: Once = Once::new();

/// Default filter used by [`setup`] when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "error";

fn install(mut builder: Builder) {
    INIT.call_once(|| {
        // A logger installed by another harness wins; nothing else to do.
        let _ = builder.format_timestamp_nanos().try_init();
    });
}

/// Configures logging with a filter that overrides `RUST_LOG`.
pub fn setup_with(filter: &str) {
    let mut builder = Builder::new();
    builder.parse_filters(filter);
    install(builder);
}

/// Configures logging from `RUST_LOG`, falling back to `filter` when the
/// variable is unset.
pub fn setup_with_default(filter: &str) {
    install(Builder::from_env(Env::new().default_filter_or(filter)));
}

/// Configures logging with the default filter, `RUST_LOG` permitting.
pub fn setup() {
    setup_with_default(DEFAULT_FILTER);
}

/// Configures logging for unit and integration tests. Output goes through the
/// test harness capture.
pub fn setup_for_tests(filter: &str) {
    let mut builder = Builder::from_env(Env::new().default_filter_or(filter));
    builder.is_test(true);
    install(builder);
}
