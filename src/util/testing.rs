//! Tracing subscriber for tests, installed once per test binary.
//!
//! `RUST_LOG` wins when set; otherwise this crate logs at trace level and
//! everything else at warn, so builder steps show up under `--nocapture`.

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "warn,lineage=trace";

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("lineage test logging ready");
    });
}

fn setup_test_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("tracing subscriber already installed");
    } else if let Err(e) = subscriber.try_init() {
        eprintln!("test logging unavailable: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_calls_when_initialising_then_installs_once() {
        init_test_setup();
        init_test_setup();
        assert!(tracing::dispatcher::has_been_set());
    }
}
