//! stderr logging for the binary.

use std::str::FromStr;

use tracing::Level;

/// Install a `tracing` fmt subscriber on stderr.
///
/// Unknown level names fall back to `info`. Calling this twice is harmless.
pub fn init(level: &str) {
    let level = Level::from_str(level.trim()).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
