//! Diagnostics output for the CLI.
//!
//! Console progress lines go to stdout; everything emitted through `tracing`
//! or `log` lands on stderr so the progress output stays clean.

use tracing::Level;

/// Install the global fmt subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging(false);
        init_logging(true);
        tracing::debug!("[Logging] still alive");
    }
}
