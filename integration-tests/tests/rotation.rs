use integration_tests::harness::{TestLog, TestMonitor, access_line, fast_params};
use logwatch_core::monitor::{Monitor, MonitorError};
use logwatch_core::stats::Pair;
use logwatch_core::tail::{RotationPolicy, TailError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const WAIT: Duration = Duration::from_secs(3);

fn existing_content() -> String {
    (0..5)
        .map(|_| access_line("GET", "/before/x", "200", "1") + "\n")
        .collect()
}

#[tokio::test]
async fn missing_file_fails_at_startup() {
    let log = TestLog::new();
    let params = fast_params(&log.missing(), 200, 100, 10, RotationPolicy::Reopen);

    let err = Monitor::open(params, &CancellationToken::new())
        .await
        .err()
        .expect("open should fail");

    assert!(matches!(err, MonitorError::Startup(TailError::Open { .. })));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn truncation_is_followed_under_reopen() {
    let log = TestLog::with_content(&existing_content());
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        1_000,
        50,
        1_000,
        RotationPolicy::Reopen,
    ))
    .await;

    log.truncate();
    log.append(&[access_line("PUT", "/after/x", "201", "5")]);

    let stats = monitor.next_busy_stats(WAIT).await;
    monitor.stop(WAIT).await.unwrap();

    assert_eq!(stats.top_sections, vec![Pair::new("/after", 1)]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn truncation_stops_the_monitor_under_fail() {
    let log = TestLog::with_content(&existing_content());
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        1_000,
        50,
        1_000,
        RotationPolicy::Fail,
    ))
    .await;

    log.truncate();

    let err = monitor.join(WAIT).await.unwrap_err();
    assert!(matches!(err, MonitorError::Source(TailError::Truncated { .. })));

    // Streams close once the monitor is gone.
    while monitor.next_stats(WAIT).await.is_some() {}
    assert!(monitor.streams.alerts.recv().await.is_none());
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rotation_is_followed_under_reopen() {
    let log = TestLog::new();
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        1_000,
        50,
        1_000,
        RotationPolicy::Reopen,
    ))
    .await;

    log.append(&[access_line("GET", "/old/x", "200", "1")]);
    let first = monitor.next_busy_stats(WAIT).await;

    log.rotate();
    log.append(&[access_line("GET", "/new/x", "200", "1")]);
    let second = monitor.next_busy_stats(WAIT).await;

    monitor.stop(WAIT).await.unwrap();

    assert_eq!(first.top_sections, vec![Pair::new("/old", 1)]);
    assert_eq!(second.top_sections, vec![Pair::new("/new", 1)]);
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rotation_stops_the_monitor_under_fail() {
    let log = TestLog::new();
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        1_000,
        50,
        1_000,
        RotationPolicy::Fail,
    ))
    .await;

    log.rotate();

    let err = monitor.join(WAIT).await.unwrap_err();
    assert!(matches!(
        err,
        MonitorError::Source(TailError::Rotated { .. } | TailError::Vanished { .. })
    ));
}
