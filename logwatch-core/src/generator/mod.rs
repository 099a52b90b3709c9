//! Synthetic access log producer for demos.
//!
//! Lines are drawn from fixed lists of users, sections and methods and appended to the log
//! file one at a time. The write rate follows a slow triangle wave so that a monitor watching
//! the file sees traffic rise above and fall back below typical alert thresholds.

mod error;
mod rate;
mod sample;
mod writer;

#[cfg(test)]
mod tests;

pub use error::GeneratorError;
pub use rate::RateWave;
pub use sample::generate_line;
pub use writer::{DEFAULT_START_INTERVAL, LogGenerator, append_line};
