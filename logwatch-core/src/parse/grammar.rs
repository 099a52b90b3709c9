use crate::parse::{LogRecord, ParseError};
use once_cell::sync::Lazy;
use regex::Regex;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<host>\S+) (?P<ident>\S+) (?P<user>\S+) ",
        r"\[(?P<timestamp>[^\]]+)\] ",
        r#""(?P<method>[A-Z]+) (?P<section>/[^/\s]*)(?:/\S*)? (?P<protocol>\S+)" "#,
        r"(?P<status>\S+) (?P<bytes>\S+)",
        r"(?:\s.*)?$",
    ))
    .expect("access log pattern must compile")
});

/// Parse a single access log line.
///
/// A trailing line terminator is ignored. Either the whole record is produced or an error is
/// returned; there is no partial result.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let caps = LINE.captures(line).ok_or(ParseError::Malformed)?;

    let bytes = parse_bytes(&caps["bytes"])?;

    Ok(LogRecord {
        remote_host: caps["host"].to_string(),
        remote_logname: caps["ident"].to_string(),
        auth_user: caps["user"].to_string(),
        timestamp: caps["timestamp"].to_string(),
        method: caps["method"].to_string(),
        section: caps["section"].to_string(),
        status: caps["status"].to_string(),
        protocol: caps["protocol"].to_string(),
        bytes,
    })
}

fn parse_bytes(field: &str) -> Result<u64, ParseError> {
    if field == "-" {
        return Ok(0);
    }

    field.parse().map_err(|_| ParseError::InvalidBytes {
        field: field.to_string(),
    })
}
