use crate::parse::LogRecord;
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything ingested since the last report cycle.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Batch {
    pub records: Vec<LogRecord>,
    /// Lines that failed to parse.
    pub invalid: u64,
}

/// Record buffer shared by ingestion and reporting.
///
/// Each operation holds the lock only for the append or the swap, never across an await.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    batch: Mutex<Batch>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: LogRecord) {
        self.lock().records.push(record);
    }

    /// Count a line that could not be parsed.
    pub fn reject(&self) {
        let mut batch = self.lock();
        batch.invalid = batch.invalid.saturating_add(1);
    }

    /// Snapshot and clear in one step.
    pub fn take(&self) -> Batch {
        mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Batch> {
        // A panic while holding the lock cannot leave a Vec push or swap half done.
        self.batch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
