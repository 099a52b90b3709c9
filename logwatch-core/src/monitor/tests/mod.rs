
use crate::monitor::MonitorParams;
use crate::tail::RotationPolicy;
use std::path::Path;
use std::time::Duration;

pub(super) fn params_for(path: &Path, window_ms: u64, interval_ms: u64, threshold: u64) -> MonitorParams {
    MonitorParams {
        log_file: path.to_path_buf(),
        time_window: Duration::from_millis(window_ms),
        update_interval: Duration::from_millis(interval_ms),
        threshold,
        top_k: 5,
        poll_interval: Duration::from_millis(5),
        on_rotation: RotationPolicy::Reopen,
    }
}

pub(super) fn line(section: &str, method: &str, status: &str, bytes: &str) -> String {
    format!(
        "127.0.0.1 - frank [09/May/2018:16:00:39 +0000] \"{method} {section}/item HTTP/1.0\" {status} {bytes}"
    )
}
