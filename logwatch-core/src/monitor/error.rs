use crate::conf::ConfigError;
use crate::tail::TailError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log file could not be opened when the monitor was created.
    #[error("cannot start monitoring: {0}")]
    Startup(#[source] TailError),

    /// The log source failed while running, e.g. under `RotationPolicy::Fail`.
    #[error("log source failed: {0}")]
    Source(#[source] TailError),

    #[error("monitor task failed: {0}")]
    Join(#[from] JoinError),
}
