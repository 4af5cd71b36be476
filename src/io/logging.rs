//! Log subscriber setup for the command-line tool
//!
//! Output goes to stderr so progress bars and log lines share one stream.
//! `RUST_LOG` takes precedence over the filter chosen from CLI flags.

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::io::error::{Result, TilingError};
use tracing_subscriber::EnvFilter;

/// Filter directive used when quiet output is requested
pub const QUIET_LOG_FILTER: &str = "error";

/// Pick the default filter directive for the given verbosity flags
///
/// Quiet wins over verbose when both are set.
pub const fn default_filter(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns `Logging` if a global subscriber is already installed
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| TilingError::Logging {
            reason: e.to_string(),
        })
}
