use super::stats;
use crate::alert::AlertRecord;
use crate::cli::watch::{JsonLines, StatsSink};
use chrono::Local;
use serde_json::Value;

#[test]
fn one_object_per_line() {
    // Arrange
    let mut sink = JsonLines::new(Vec::new());

    // Act
    sink.on_stats(&stats(3)).unwrap();
    sink.on_alert(
        &AlertRecord {
            alert: true,
            num_traffic: 1500,
        },
        Local::now(),
    )
    .unwrap();

    // Assert
    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["type"], "stats");
    assert_eq!(lines[0]["num_requests"], 3);
    assert_eq!(lines[0]["bytes_count"], "300 B");
    assert_eq!(lines[0]["top_sections"][0]["key"], "/api");
    assert_eq!(lines[0]["top_sections"][0]["count"], 3);

    assert_eq!(lines[1]["type"], "alert");
    assert_eq!(lines[1]["alert"], true);
    assert_eq!(lines[1]["num_traffic"], 1500);
    assert!(lines[1]["triggered_at"].is_string());
}
