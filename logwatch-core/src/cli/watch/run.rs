use crate::cli::check::print_config_error;
use crate::cli::watch::constants::RENDER_TICK;
use crate::cli::watch::{JsonLines, RunArgs, StatsSink, TextDashboard};
use crate::cli::{build_runtime, shutdown_token};
use crate::conf::validated_params;
use crate::generator::{DEFAULT_START_INTERVAL, LogGenerator};
use crate::logging::{OutputMode, default_output_mode};
use crate::monitor::{Monitor, MonitorParams, MonitorStreams};
use anyhow::Context;
use chrono::Local;
use std::io;
use std::time::Duration;
use tokio::fs::OpenOptions;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let params = match args.resolve().and_then(|config| validated_params(&config)) {
        Ok(params) => params,
        Err(err) => {
            print_config_error(err, false);
            std::process::exit(1);
        }
    };
    let mode = args.output.unwrap_or_else(default_output_mode);

    let runtime = build_runtime()?;
    let cancel = shutdown_token()?;

    runtime.block_on(watch(params, mode, args.demo, cancel))
}

async fn watch(
    params: MonitorParams,
    mode: OutputMode,
    demo: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if demo {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&params.log_file)
            .await
            .with_context(|| format!("failed to create {}", params.log_file.display()))?;
    }

    let (monitor, streams) = Monitor::open(params.clone(), &cancel).await?;
    let monitor_task = tokio::spawn(monitor.run());

    let generator_task = demo.then(|| {
        tokio::spawn(
            LogGenerator::new(&params.log_file, DEFAULT_START_INTERVAL).run(cancel.clone()),
        )
    });

    let drained = match mode {
        OutputMode::Dashboard => {
            let sink = TextDashboard::new(io::stdout(), &params);
            drive(sink, streams, &cancel, RENDER_TICK).await.map(drop)
        }
        OutputMode::Json => {
            let sink = JsonLines::new(io::stdout());
            drive(sink, streams, &cancel, RENDER_TICK).await.map(drop)
        }
    };

    // Stop everything else, whichever side ended first.
    cancel.cancel();

    monitor_task.await??;
    if let Some(task) = generator_task {
        let lines = task.await??;
        info!(lines, "demo generator finished");
    }
    drained.context("failed to write output")?;

    Ok(())
}

/// Forward both streams into `sink` until they close or `cancel` fires.
pub async fn drive<S: StatsSink>(
    mut sink: S,
    mut streams: MonitorStreams,
    cancel: &CancellationToken,
    tick: Duration,
) -> io::Result<S> {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut stats_open = true;
    let mut alerts_open = true;

    while stats_open || alerts_open {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            alert = streams.alerts.recv(), if alerts_open => match alert {
                Some(alert) => sink.on_alert(&alert, Local::now())?,
                None => alerts_open = false,
            },
            stats = streams.stats.recv(), if stats_open => match stats {
                Some(stats) => sink.on_stats(&stats)?,
                None => stats_open = false,
            },
            _ = ticker.tick() => sink.on_tick()?,
        }
    }

    sink.finish()?;
    Ok(sink)
}
