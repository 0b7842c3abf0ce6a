//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr so they never interleave with the prompts and
//! results written to stdout.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber with the given filter directive.
///
/// Fails on an unparsable directive or if a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {level}"))?;

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
