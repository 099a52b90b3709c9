use crate::tail::RotationPolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Validated inputs of a [`Monitor`](crate::monitor::Monitor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorParams {
    pub log_file: PathBuf,
    /// Trailing duration summed for alert evaluation.
    pub time_window: Duration,
    /// Period between report cycles.
    pub update_interval: Duration,
    /// Requests per second.
    pub threshold: u64,
    pub top_k: usize,
    /// Wait between reads once the end of the file is reached.
    pub poll_interval: Duration,
    pub on_rotation: RotationPolicy,
}

impl MonitorParams {
    /// Ring capacity of the alert window.
    pub fn window_slots(&self) -> usize {
        let window = self.time_window.as_millis();
        let interval = self.update_interval.as_millis();

        let slots = window.checked_div(interval).unwrap_or(1).max(1);
        usize::try_from(slots).unwrap_or(usize::MAX)
    }

    /// `threshold × time_window`, in requests, rounded down.
    pub fn alert_limit(&self) -> u64 {
        u64::try_from(self.alert_limit_millis() / 1000).unwrap_or(u64::MAX)
    }

    /// `threshold × time_window` in thousandths of a request, exact for any whole
    /// millisecond window.
    pub fn alert_limit_millis(&self) -> u128 {
        u128::from(self.threshold) * self.time_window.as_millis()
    }
}
