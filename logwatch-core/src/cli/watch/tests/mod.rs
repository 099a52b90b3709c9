mod json_tests;
mod render_tests;

use crate::monitor::MonitorParams;
use crate::stats::{Pair, StatRecord};
use crate::tail::RotationPolicy;
use std::path::PathBuf;
use std::time::Duration;

pub(super) fn params() -> MonitorParams {
    MonitorParams {
        log_file: PathBuf::from("/tmp/access.log"),
        time_window: Duration::from_secs(120),
        update_interval: Duration::from_secs(10),
        threshold: 10,
        top_k: 5,
        poll_interval: Duration::from_millis(50),
        on_rotation: RotationPolicy::Reopen,
    }
}

pub(super) fn stats(requests: u64) -> StatRecord {
    StatRecord {
        top_sections: vec![Pair::new("/api", requests)],
        top_methods: vec![Pair::new("GET", requests)],
        top_status: vec![Pair::new("2xx", requests)],
        num_requests: requests,
        bytes_count: format!("{} B", requests * 100),
        invalid_records: 0,
    }
}
