//! `logwatch run`: start a monitor and hand its two streams to a sink.
//!
//! ```text
//! log file -> Monitor -> stats / alerts streams -> drive -> StatsSink
//!                                                          (TextDashboard | JsonLines)
//! ```

mod args;
mod constants;
mod json;
mod render;
mod run;
mod sink;
mod sparkline;

#[cfg(test)]
mod tests;

pub use args::RunArgs;
pub use json::JsonLines;
pub use render::{TextDashboard, alert_message, fmt_uptime};
pub use run::{drive, run};
pub use sink::StatsSink;
pub use sparkline::sparkline;
