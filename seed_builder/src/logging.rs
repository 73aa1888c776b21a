//! Logging setup for the `seed-builder` binary.
//!
//! Logs go to stderr so stdout carries only the summary line.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install a fmt subscriber filtered at `level` (e.g. `warn`, `seed_graph=debug`).
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    Registry::default().with(filter).with(layer).try_init()?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "seed-builder starting");
    Ok(())
}
