// Logging
// tracing subscriber setup; all log output goes to stderr so stdout stays a clean report

use std::io::{self, IsTerminal};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Map the number of `-v` flags onto a level, falling back to the configured one
pub fn level_for(verbosity: u8, configured: &str) -> &str {
    match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    }
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. Safe to call more than once;
/// only the first call installs a subscriber.
pub fn init(level: &str) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("missing_strings={level}")));

        // A subscriber may already be installed by a test harness
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .try_init();
    });
}
