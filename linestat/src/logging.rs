//! Logging setup.
//!
//! stdout carries the table, so every log line goes to stderr.

use tracing_subscriber::filter::EnvFilter;

/// Default level when neither flags nor `RUST_LOG` say otherwise
const DEFAULT_LEVEL: &str = "warn";

/// Build an `EnvFilter` from CLI flags and environment.
///
/// Priority: quiet flag > verbose flag > RUST_LOG env > default level
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global stderr subscriber.
pub fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
