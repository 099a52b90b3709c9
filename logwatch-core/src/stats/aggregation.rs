use crate::parse::LogRecord;
use crate::stats::format::format_byte_count;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// A key of a frequency table and the number of hits it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub key: String,
    pub count: u64,
}

impl Pair {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Summary of one update interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    pub top_sections: Vec<Pair>,
    pub top_methods: Vec<Pair>,
    pub top_status: Vec<Pair>,
    pub num_requests: u64,
    /// Already formatted for display, e.g. `"465.9 MB"`.
    pub bytes_count: String,
    /// Lines dropped during the interval because they did not parse.
    pub invalid_records: u64,
}

/// Summarize a batch of records, keeping at most `k` entries per table.
pub fn aggregate(records: &[LogRecord], k: usize) -> StatRecord {
    let mut sections: HashMap<&str, u64> = HashMap::new();
    let mut methods: HashMap<&str, u64> = HashMap::new();
    let mut statuses: HashMap<Cow<'_, str>, u64> = HashMap::new();
    let mut bytes: u64 = 0;

    for record in records {
        *sections.entry(&record.section).or_insert(0) += 1;
        *methods.entry(&record.method).or_insert(0) += 1;
        *statuses.entry(status_class(&record.status)).or_insert(0) += 1;
        bytes = bytes.saturating_add(record.bytes);
    }

    StatRecord {
        top_sections: top_k(sections, k),
        top_methods: top_k(methods, k),
        top_status: top_k(statuses, k),
        num_requests: records.len() as u64,
        bytes_count: format_byte_count(bytes),
        invalid_records: 0,
    }
}

/// Collapse a three-digit status code to its class (`404` -> `4xx`).
///
/// Anything that is not three characters starting with a digit is returned unchanged.
pub fn status_class(status: &str) -> Cow<'_, str> {
    match status.as_bytes() {
        [d, _, _] if d.is_ascii_digit() => Cow::Owned(format!("{}xx", *d as char)),
        _ => Cow::Borrowed(status),
    }
}

/// The `k` highest counts, highest first. Equal counts are ordered by key so the output is
/// deterministic.
pub fn top_k<K>(counts: impl IntoIterator<Item = (K, u64)>, k: usize) -> Vec<Pair>
where
    K: Into<String>,
{
    let mut pairs: Vec<Pair> = counts
        .into_iter()
        .map(|(key, count)| Pair::new(key, count))
        .collect();

    pairs.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    pairs.truncate(k);
    pairs
}
