//! Tracing setup for the listkit CLI
//!
//! Usage:
//!   listkit --debug ...               # Debug logging to stderr
//!   RUST_LOG=listkit_core=trace ...   # Fine-grained log control
//!
//! Logs always go to stderr so `--json` output on stdout stays clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level unless RUST_LOG is set)
    pub debug: bool,
    /// Level used when neither RUST_LOG nor --debug is given
    pub default_level: String,
}

fn build_filter(config: &TracingConfig) -> EnvFilter {
    let fallback = if config.debug {
        "debug"
    } else {
        config.default_level.as_str()
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
