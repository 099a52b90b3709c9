//! Follow a growing log file.
//!
//! The file is opened, positioned at its current end and then read line by line as writers
//! append to it. When no complete line is available the reader sleeps for the poll interval
//! before retrying. Truncation and replacement of the file are handled according to a
//! [`RotationPolicy`].

mod error;
mod follow;
mod policy;


pub use error::TailError;
pub use follow::LogTail;
pub use policy::RotationPolicy;
