//! Tracing setup shared by the binaries.
//!
//! Logs go to stderr so stdout carries only the game transcript. `RUST_LOG`
//! overrides the default level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `verbose` lowers the default level from
/// warn to debug. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
