use crate::alert::AlertRecord;
use crate::stats::StatRecord;
use chrono::{DateTime, Local};
use std::io;

/// Consumer of the monitor's output streams.
pub trait StatsSink {
    fn on_stats(&mut self, stats: &StatRecord) -> io::Result<()>;

    /// `at` is when the transition was received.
    fn on_alert(&mut self, alert: &AlertRecord, at: DateTime<Local>) -> io::Result<()>;

    /// Called on a fixed cadence between records.
    fn on_tick(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once when the streams are done.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
