//! The monitoring pipeline.
//!
//! A [`Monitor`] runs two tasks for its whole lifetime:
//!
//! - ingestion: tail the log file, parse each line, append to the shared [`RecordBuffer`];
//! - reporting: every update interval, take the buffer contents, summarize them, advance
//!   the alert engine and publish on the stats and alert streams.
//!
//! Both tasks watch the same cancellation token and stop within one poll or tick of it firing.

mod buffer;
mod error;
mod params;
mod run;

#[cfg(test)]
mod tests;

pub use buffer::{Batch, RecordBuffer};
pub use error::MonitorError;
pub use params::MonitorParams;
pub use run::{Monitor, MonitorStreams, STREAM_CAPACITY};
