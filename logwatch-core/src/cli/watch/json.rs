use crate::alert::AlertRecord;
use crate::cli::watch::StatsSink;
use crate::stats::StatRecord;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Output<'a> {
    Stats(&'a StatRecord),
    Alert {
        #[serde(flatten)]
        record: &'a AlertRecord,
        triggered_at: DateTime<Local>,
    },
}

/// Writes each record as one JSON object per line.
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, output: &Output<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, output)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> StatsSink for JsonLines<W> {
    fn on_stats(&mut self, stats: &StatRecord) -> io::Result<()> {
        self.emit(&Output::Stats(stats))
    }

    fn on_alert(&mut self, alert: &AlertRecord, at: DateTime<Local>) -> io::Result<()> {
        self.emit(&Output::Alert {
            record: alert,
            triggered_at: at,
        })
    }
}
