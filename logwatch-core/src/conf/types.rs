use crate::monitor::MonitorParams;
use crate::tail::RotationPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "/tmp/access.log";

/// On-disk configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogwatchConfig {
    pub log_file: PathBuf,
    pub time_window_secs: u64,
    /// Requests per second averaged over the time window.
    pub threshold: u64,
    pub update_interval_secs: u64,
    pub top_k: usize,
    pub on_rotation: RotationPolicy,
    pub poll_interval_ms: u64,
}

impl Default for LogwatchConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            time_window_secs: 120,
            threshold: 10,
            update_interval_secs: 10,
            top_k: 5,
            on_rotation: RotationPolicy::Reopen,
            poll_interval_ms: 50,
        }
    }
}

impl LogwatchConfig {
    /// Convert without checking; see [`validated_params`](crate::conf::validated_params).
    pub fn to_params(&self) -> MonitorParams {
        MonitorParams {
            log_file: self.log_file.clone(),
            time_window: Duration::from_secs(self.time_window_secs),
            update_interval: Duration::from_secs(self.update_interval_secs),
            threshold: self.threshold,
            top_k: self.top_k,
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            on_rotation: self.on_rotation,
        }
    }
}
