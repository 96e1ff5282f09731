//! Tracing subscriber setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a stderr subscriber.
///
/// `LIFESPAN_LOG` takes EnvFilter syntax (`lifespan_core=trace`). Without it
/// the level is `warn`, or `debug` for the lifespan crates when `verbose`.
/// Idempotent.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "warn,lifespan_core=debug,lifespan=debug"
        } else {
            "warn"
        };
        let filter =
            EnvFilter::try_from_env("LIFESPAN_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
