use crate::alert::{AlertEngine, AlertRecord};
use crate::conf::validate_params;
use crate::monitor::{MonitorError, MonitorParams, RecordBuffer};
use crate::parse::parse_line;
use crate::stats::{StatRecord, aggregate};
use crate::tail::{LogTail, TailError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

/// Outbound streams hold at most one undelivered record; a slow consumer stalls reporting.
pub const STREAM_CAPACITY: usize = 1;

/// Receiving ends of the monitor's two outbound streams.
///
/// Both close once the monitor stops.
#[derive(Debug)]
pub struct MonitorStreams {
    pub stats: mpsc::Receiver<StatRecord>,
    pub alerts: mpsc::Receiver<AlertRecord>,
}

pub struct Monitor {
    params: MonitorParams,
    tail: LogTail,
    buffer: Arc<RecordBuffer>,
    stats_tx: mpsc::Sender<StatRecord>,
    alerts_tx: mpsc::Sender<AlertRecord>,
    cancel: CancellationToken,
}

impl Monitor {
    /// Validate `params` and open the log file.
    ///
    /// Failing to open the file is fatal here rather than inside [`run`](Self::run). The
    /// monitor stops when `cancel` fires; a fatal error inside the monitor does not cancel
    /// the caller's token, it closes the streams instead.
    pub async fn open(
        params: MonitorParams,
        cancel: &CancellationToken,
    ) -> Result<(Self, MonitorStreams), MonitorError> {
        validate_params(&params)?;

        let tail = LogTail::open(&params.log_file, params.poll_interval, params.on_rotation)
            .await
            .map_err(MonitorError::Startup)?;

        let (stats_tx, stats) = mpsc::channel(STREAM_CAPACITY);
        let (alerts_tx, alerts) = mpsc::channel(STREAM_CAPACITY);

        let monitor = Self {
            params,
            tail,
            buffer: Arc::new(RecordBuffer::new()),
            stats_tx,
            alerts_tx,
            cancel: cancel.child_token(),
        };

        Ok((monitor, MonitorStreams { stats, alerts }))
    }

    /// Run ingestion and reporting until cancelled or until the log source fails.
    pub async fn run(self) -> Result<(), MonitorError> {
        let Monitor {
            params,
            tail,
            buffer,
            stats_tx,
            alerts_tx,
            cancel,
        } = self;

        info!(
            path = %params.log_file.display(),
            window = ?params.time_window,
            interval = ?params.update_interval,
            threshold = params.threshold,
            limit = params.alert_limit(),
            "monitor started"
        );

        let reporter = Reporter::new(&params, buffer.clone(), stats_tx, alerts_tx);

        let ingestion = tokio::spawn(ingest(tail, buffer, cancel.clone()));
        let reporting = tokio::spawn(report(reporter, params.update_interval, cancel));

        let (ingested, reported) = tokio::join!(ingestion, reporting);
        reported?;

        if let Err(e) = ingested? {
            error!(error = %e, "log source failed");
            return Err(MonitorError::Source(e));
        }

        info!("monitor stopped");
        Ok(())
    }
}

async fn ingest(
    mut tail: LogTail,
    buffer: Arc<RecordBuffer>,
    cancel: CancellationToken,
) -> Result<(), TailError> {
    // Reporting stops too when this task ends, on error as well as on cancel.
    let _guard = cancel.clone().drop_guard();

    while let Some(line) = tail.next_line(&cancel).await? {
        match parse_line(&line) {
            Ok(record) => buffer.push(record),
            Err(e) => {
                trace!(error = %e, line = %line, "dropping unparsable line");
                buffer.reject();
            }
        }
    }

    debug!("ingestion stopped");
    Ok(())
}

async fn report(mut reporter: Reporter, period: Duration, cancel: CancellationToken) {
    let _guard = cancel.clone().drop_guard();

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let (stats, alert) = reporter.cycle();

        if deliver(&reporter.stats_tx, stats, &cancel).await == Delivery::Cancelled {
            break;
        }

        if let Some(alert) = alert {
            if alert.alert {
                warn!(hits = alert.num_traffic, "high traffic alert");
            } else {
                info!(hits = alert.num_traffic, "high traffic recovered");
            }

            if deliver(&reporter.alerts_tx, alert, &cancel).await == Delivery::Cancelled {
                break;
            }
        }
    }

    debug!("reporting stopped");
}

/// State owned by the reporting task.
pub(super) struct Reporter {
    buffer: Arc<RecordBuffer>,
    engine: AlertEngine,
    top_k: usize,
    stats_tx: mpsc::Sender<StatRecord>,
    alerts_tx: mpsc::Sender<AlertRecord>,
}

impl Reporter {
    pub(super) fn new(
        params: &MonitorParams,
        buffer: Arc<RecordBuffer>,
        stats_tx: mpsc::Sender<StatRecord>,
        alerts_tx: mpsc::Sender<AlertRecord>,
    ) -> Self {
        Self {
            buffer,
            engine: AlertEngine::from_params(params),
            top_k: params.top_k,
            stats_tx,
            alerts_tx,
        }
    }

    /// One report cycle: drain the buffer, summarize it and advance the alert engine.
    pub(super) fn cycle(&mut self) -> (StatRecord, Option<AlertRecord>) {
        let batch = self.buffer.take();

        let stats = StatRecord {
            invalid_records: batch.invalid,
            ..aggregate(&batch.records, self.top_k)
        };
        let alert = self.engine.observe(stats.num_requests);

        trace!(
            requests = stats.num_requests,
            invalid = stats.invalid_records,
            window_total = self.engine.window_total(),
            "report cycle"
        );

        (stats, alert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Sent,
    /// The receiver is gone; the record is dropped and reporting carries on.
    Closed,
    Cancelled,
}

async fn deliver<T>(tx: &mpsc::Sender<T>, value: T, cancel: &CancellationToken) -> Delivery {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Delivery::Cancelled,
        sent = tx.send(value) => match sent {
            Ok(()) => Delivery::Sent,
            Err(_) => Delivery::Closed,
        },
    }
}
