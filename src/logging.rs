use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FCD_LOG=debug`.
pub const LOG_ENV: &str = "FCD_LOG";

/// Installs a stderr subscriber. Stdout is reserved for the selected path.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
