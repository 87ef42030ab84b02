// Logging setup for the hashsum binary
// Filter precedence: HASHSUM_LOG, then --log-level, then --verbose (debug), else warn

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "HASHSUM_LOG";

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Build the event filter from the environment and CLI flags
pub fn build_env_filter(level: Option<&str>, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let level = match level {
        Some(level) => level,
        None if verbose => VERBOSE_LEVEL,
        None => DEFAULT_LEVEL,
    };

    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))
}

/// Install a stderr fmt subscriber. Stdout stays reserved for checksums.
pub fn init_logging(level: Option<&str>, verbose: bool) -> Result<()> {
    let filter = build_env_filter(level, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
