use logwatch_core::monitor::{Monitor, MonitorError, MonitorParams, MonitorStreams};
use logwatch_core::stats::StatRecord;
use logwatch_core::tail::RotationPolicy;
use std::path::Path;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

/// Millisecond-scale parameters so tests run many report cycles quickly.
pub fn fast_params(
    path: &Path,
    window_ms: u64,
    interval_ms: u64,
    threshold: u64,
    on_rotation: RotationPolicy,
) -> MonitorParams {
    MonitorParams {
        log_file: path.to_path_buf(),
        time_window: Duration::from_millis(window_ms),
        update_interval: Duration::from_millis(interval_ms),
        threshold,
        top_k: 5,
        poll_interval: Duration::from_millis(5),
        on_rotation,
    }
}

/// A running monitor plus the handles a test needs to observe and stop it.
pub struct TestMonitor {
    pub streams: MonitorStreams,
    pub cancel: CancellationToken,
    task: JoinHandle<Result<(), MonitorError>>,
}

impl TestMonitor {
    pub async fn start(params: MonitorParams) -> Self {
        let cancel = CancellationToken::new();
        let (monitor, streams) = Monitor::open(params, &cancel)
            .await
            .expect("failed to open monitor");
        let task = tokio::spawn(monitor.run());

        Self {
            streams,
            cancel,
            task,
        }
    }

    pub async fn next_stats(&mut self, within: Duration) -> Option<StatRecord> {
        timeout(within, self.streams.stats.recv())
            .await
            .expect("no stats record in time")
    }

    /// Skip empty intervals until one carries requests.
    pub async fn next_busy_stats(&mut self, within: Duration) -> StatRecord {
        timeout(within, async {
            loop {
                match self.streams.stats.recv().await {
                    Some(stats) if stats.num_requests > 0 => return stats,
                    Some(_) => continue,
                    None => panic!("stats stream closed"),
                }
            }
        })
        .await
        .expect("no busy interval in time")
    }

    /// Wait for the monitor to end on its own.
    pub async fn join(&mut self, within: Duration) -> Result<(), MonitorError> {
        timeout(within, &mut self.task)
            .await
            .expect("monitor did not stop in time")
            .expect("monitor task panicked")
    }

    pub async fn stop(&mut self, within: Duration) -> Result<(), MonitorError> {
        self.cancel.cancel();
        self.join(within).await
    }
}
