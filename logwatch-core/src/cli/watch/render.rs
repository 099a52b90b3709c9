use crate::alert::AlertRecord;
use crate::cli::watch::StatsSink;
use crate::cli::watch::constants::{ALERT_HISTORY, HISTORY_LEN};
use crate::cli::watch::sparkline::sparkline;
use crate::monitor::MonitorParams;
use crate::stats::{Pair, StatRecord};
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const TRIGGER_FORMAT: &str = "%H:%M:%S, %B %d %Y";

/// `HHhMMminSSs`
pub fn fmt_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}h{:02}min{:02}s",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

pub fn alert_message(alert: &AlertRecord, at: &DateTime<Local>) -> String {
    if alert.alert {
        format!(
            "High traffic generated an alert - hits = {}, triggered at {}",
            alert.num_traffic,
            at.format(TRIGGER_FORMAT)
        )
    } else {
        format!(
            "High traffic has recovered, triggered at {}",
            at.format(TRIGGER_FORMAT)
        )
    }
}

/// Full-screen text dashboard, redrawn on every update.
pub struct TextDashboard<W: Write> {
    out: W,
    started: Instant,
    log_file: String,
    time_window: Duration,
    update_interval: Duration,
    threshold: u64,
    latest: Option<StatRecord>,
    history: VecDeque<u64>,
    alerts: VecDeque<(AlertRecord, DateTime<Local>)>,
}

impl<W: Write> TextDashboard<W> {
    pub fn new(out: W, params: &MonitorParams) -> Self {
        Self {
            out,
            started: Instant::now(),
            log_file: params.log_file.display().to_string(),
            time_window: params.time_window,
            update_interval: params.update_interval,
            threshold: params.threshold,
            latest: None,
            history: VecDeque::with_capacity(HISTORY_LEN),
            alerts: VecDeque::with_capacity(ALERT_HISTORY),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn in_alert(&self) -> bool {
        self.alerts.back().is_some_and(|(alert, _)| alert.alert)
    }

    /// Dashboard text as of `elapsed` since start.
    pub fn render(&self, elapsed: Duration) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", format!("Log monitor: {}", self.log_file).yellow().bold());
        let _ = writeln!(
            out,
            "Uptime: {} | window {}s | update every {}s | threshold {} req/s",
            fmt_uptime(elapsed),
            self.time_window.as_secs_f64(),
            self.update_interval.as_secs_f64(),
            self.threshold
        );
        if self.in_alert() {
            let _ = writeln!(out, "State: {}", "ALERT".red().bold());
        } else {
            let _ = writeln!(out, "State: {}", "OK".green());
        }
        out.push('\n');

        match &self.latest {
            Some(stats) => {
                let _ = writeln!(out, "{}", "Last interval".yellow());
                let _ = writeln!(
                    out,
                    "  requests: {} | bytes: {} | invalid lines: {}\n",
                    stats.num_requests, stats.bytes_count, stats.invalid_records
                );
                push_table(&mut out, "Top sections", &stats.top_sections);
                push_table(&mut out, "Top methods", &stats.top_methods);
                push_table(&mut out, "Top status", &stats.top_status);
            }
            None => {
                let _ = writeln!(out, "Waiting for the first update...\n");
            }
        }

        if !self.history.is_empty() {
            let values: Vec<u64> = self.history.iter().copied().collect();
            let _ = writeln!(out, "{}", "Requests per interval".yellow());
            let _ = writeln!(out, "  {}\n", sparkline(&values));
        }

        let _ = writeln!(out, "{}", "Alerts".yellow());
        if self.alerts.is_empty() {
            let _ = writeln!(out, "  none");
        }
        for (alert, at) in &self.alerts {
            let message = alert_message(alert, at);
            if alert.alert {
                let _ = writeln!(out, "  {}", message.red());
            } else {
                let _ = writeln!(out, "  {}", message.green());
            }
        }

        out
    }

    fn redraw(&mut self) -> io::Result<()> {
        let text = self.render(self.started.elapsed());
        write!(self.out, "\x1b[2J\x1b[H{text}")?;
        self.out.flush()
    }
}

fn push_table(out: &mut String, title: &str, pairs: &[Pair]) {
    let _ = writeln!(out, "{}", title.yellow());
    if pairs.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for pair in pairs {
        let _ = writeln!(out, "  {:<24} {:>8}", pair.key, pair.count);
    }
    out.push('\n');
}

impl<W: Write> StatsSink for TextDashboard<W> {
    fn on_stats(&mut self, stats: &StatRecord) -> io::Result<()> {
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(stats.num_requests);
        self.latest = Some(stats.clone());
        self.redraw()
    }

    fn on_alert(&mut self, alert: &AlertRecord, at: DateTime<Local>) -> io::Result<()> {
        if self.alerts.len() == ALERT_HISTORY {
            self.alerts.pop_front();
        }
        self.alerts.push_back((*alert, at));
        self.redraw()
    }

    fn on_tick(&mut self) -> io::Result<()> {
        self.redraw()
    }

    fn finish(&mut self) -> io::Result<()> {
        // Leave the last frame on screen.
        writeln!(self.out)?;
        self.out.flush()
    }
}
