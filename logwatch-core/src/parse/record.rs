use crate::parse::{ParseError, parse_line};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub remote_host: String,
    pub remote_logname: String,
    pub auth_user: String,
    /// Kept verbatim, without the surrounding brackets.
    pub timestamp: String,
    pub method: String,
    /// First path segment of the request target, always starts with `/`.
    pub section: String,
    pub status: String,
    pub protocol: String,
    /// `-` in the log is recorded as 0.
    pub bytes: u64,
}

impl FromStr for LogRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
