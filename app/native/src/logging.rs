//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr in the compact format so they never mix with command
//! output on stdout. The filter comes from, in order of precedence:
//!
//! 1. the `TESSERA_LOG` environment variable (any `EnvFilter` directive)
//! 2. `--verbose` on the command line (`debug`)
//! 3. `logLevel` in the configuration file (default `warn`)

use std::io::{self, IsTerminal};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::LOG_ENV_VAR;

/// Bare level names accepted in any case.
const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Returns the filter directive to use when `TESSERA_LOG` is unset.
///
/// A bare level name is lowercased; a full directive is used verbatim.
#[must_use]
pub fn fallback_directive(verbose: bool, configured: &str) -> String {
    if verbose {
        return "debug".to_string();
    }

    let configured = configured.trim();
    if configured.is_empty() {
        return "warn".to_string();
    }

    let level = configured.to_lowercase();
    if LEVEL_NAMES.contains(&level.as_str()) { level } else { configured.to_string() }
}

fn build_env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|err| {
            eprintln!("tessera: invalid log level '{fallback}' ({err}), using 'warn'");
            EnvFilter::new("warn")
        })
}

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool, configured_level: &str) {
    let filter = build_env_filter(&fallback_directive(verbose, configured_level));
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_err() {
        tracing::debug!("logging already initialized");
    }
}
