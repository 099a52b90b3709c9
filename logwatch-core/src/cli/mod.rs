//! Command implementations behind the `logwatch` binary.
//!
//! - `run` follows a log file and feeds the monitor's streams to a dashboard or JSON sink;
//! - `check` validates a config file;
//! - `generate` appends synthetic traffic to a log file.

pub mod check;
pub mod generate;
pub mod watch;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;

pub(crate) fn build_runtime() -> anyhow::Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")
}

/// Token cancelled on Ctrl-C. Can only be installed once per process.
pub(crate) fn shutdown_token() -> anyhow::Result<CancellationToken> {
    let cancel = CancellationToken::new();

    ctrlc::set_handler({
        let cancel = cancel.clone();
        move || {
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
    })
    .context("failed to install Ctrl-C handler")?;

    Ok(cancel)
}
