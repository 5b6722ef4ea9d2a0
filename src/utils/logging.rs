//! Logging initialization
//!
//! Logs go to stderr so that stdout only carries command results.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the binary.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `debug` and the
/// default is `warn`.
pub fn init_logging(debug_enabled: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug_enabled)));

    // try_init: a second initialization (e.g. from tests) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_enabled)
        .with_line_number(debug_enabled)
        .try_init();

    debug!("numerica started with debug logging: {}", debug_enabled);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn default_level(debug_enabled: bool) -> &'static str {
    if debug_enabled { "debug" } else { "warn" }
}
