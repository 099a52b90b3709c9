use super::{params, stats};
use crate::alert::AlertRecord;
use crate::cli::watch::{StatsSink, TextDashboard, alert_message, fmt_uptime};
use chrono::{Local, TimeZone};
use std::time::Duration;

#[test]
fn uptime_is_zero_padded() {
    assert_eq!(fmt_uptime(Duration::from_secs(0)), "00h00min00s");
    assert_eq!(fmt_uptime(Duration::from_secs(3_725)), "01h02min05s");
    assert_eq!(fmt_uptime(Duration::from_secs(100 * 3600 + 59)), "100h00min59s");
}

#[test]
fn alert_messages_carry_hits_and_time() {
    let at = Local.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();

    let fired = AlertRecord {
        alert: true,
        num_traffic: 1500,
    };
    let recovered = AlertRecord {
        alert: false,
        num_traffic: 300,
    };

    assert_eq!(
        alert_message(&fired, &at),
        "High traffic generated an alert - hits = 1500, triggered at 15:04:05, January 02 2006"
    );
    assert_eq!(
        alert_message(&recovered, &at),
        "High traffic has recovered, triggered at 15:04:05, January 02 2006"
    );
}

#[test]
fn waits_for_first_update() {
    let dashboard = TextDashboard::new(Vec::new(), &params());

    let text = dashboard.render(Duration::from_secs(5));

    assert!(text.contains("Log monitor: /tmp/access.log"));
    assert!(text.contains("Uptime: 00h00min05s"));
    assert!(text.contains("Waiting for the first update"));
    assert!(text.contains("none"));
}

#[test]
fn shows_latest_stats_and_history() {
    // Arrange
    let mut dashboard = TextDashboard::new(Vec::new(), &params());

    // Act
    dashboard.on_stats(&stats(0)).unwrap();
    dashboard.on_stats(&stats(7)).unwrap();
    let text = dashboard.render(Duration::from_secs(20));

    // Assert
    assert!(text.contains("requests: 7 | bytes: 700 B | invalid lines: 0"));
    assert!(text.contains("/api"));
    assert!(text.contains("2xx"));
    assert!(text.contains("▁█"));
}

#[test]
fn keeps_alert_history_and_state() {
    let mut dashboard = TextDashboard::new(Vec::new(), &params());
    let at = Local.with_ymd_and_hms(2020, 5, 1, 8, 0, 0).unwrap();

    dashboard
        .on_alert(
            &AlertRecord {
                alert: true,
                num_traffic: 1300,
            },
            at,
        )
        .unwrap();
    assert!(dashboard.in_alert());

    dashboard
        .on_alert(
            &AlertRecord {
                alert: false,
                num_traffic: 900,
            },
            at,
        )
        .unwrap();
    assert!(!dashboard.in_alert());

    let text = dashboard.render(Duration::ZERO);
    assert!(text.contains("hits = 1300, triggered at 08:00:00, May 01 2020"));
    assert!(text.contains("High traffic has recovered, triggered at 08:00:00, May 01 2020"));
}

#[test]
fn every_redraw_starts_from_a_clear_screen() {
    let mut dashboard = TextDashboard::new(Vec::new(), &params());

    dashboard.on_tick().unwrap();
    dashboard.on_stats(&stats(2)).unwrap();

    let out = String::from_utf8(dashboard.into_inner()).unwrap();
    assert!(out.starts_with("\x1b[2J\x1b[H"));
    assert_eq!(out.matches("\x1b[2J\x1b[H").count(), 2);
}
