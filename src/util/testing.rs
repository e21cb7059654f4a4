//! Test support: one global tracing subscriber per test binary

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the test subscriber; later calls are no-ops.
///
/// Level comes from `RUST_LOG`, default `trace`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_thread_names(false)
                .with_filter(env_filter),
        )
        .try_init()
        .unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
}
