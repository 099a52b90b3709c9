use crate::cli::{build_runtime, shutdown_token};
use crate::generator::LogGenerator;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Append synthetic lines to `logfile` until Ctrl-C.
pub fn generate(logfile: PathBuf, start_interval: Duration) -> anyhow::Result<()> {
    let runtime = build_runtime()?;
    let cancel = shutdown_token()?;

    let written = runtime.block_on(LogGenerator::new(logfile, start_interval).run(cancel))?;

    info!(lines = written, "done");
    Ok(())
}
