use integration_tests::harness::{TestLog, TestMonitor, access_line, fast_params};
use logwatch_core::tail::RotationPolicy;
use std::time::{Duration, Instant};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn idle_monitor_stops_within_one_poll() {
    let log = TestLog::new();
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        10_000,
        1_000,
        10,
        RotationPolicy::Reopen,
    ))
    .await;

    let started = Instant::now();
    monitor.stop(Duration::from_millis(500)).await.unwrap();

    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocked_send_is_abandoned_on_cancel() {
    // Arrange
    let log = TestLog::new();
    let mut monitor = TestMonitor::start(fast_params(
        log.path(),
        1_000,
        20,
        10,
        RotationPolicy::Reopen,
    ))
    .await;
    log.append(&[access_line("GET", "/api/x", "200", "1")]);

    // Nobody reads: the stats stream fills up and reporting blocks on send.
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Act
    let started = Instant::now();
    monitor.stop(Duration::from_millis(500)).await.unwrap();
    let took = started.elapsed();

    // Assert
    assert!(took < Duration::from_millis(100), "stop took {took:?}");

    let mut buffered = 0;
    while monitor.streams.stats.recv().await.is_some() {
        buffered += 1;
    }
    assert!(buffered <= 1, "{buffered} records delivered after cancel");
    assert!(monitor.streams.alerts.recv().await.is_none());
}
