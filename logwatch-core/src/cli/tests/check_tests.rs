use crate::cli::check::{config_error_hint, config_error_hints, summary};
use crate::conf::{ConfigError, LogwatchConfig, validated_params};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn summary_of_defaults() {
    let params = validated_params(&LogwatchConfig::default()).unwrap();

    assert_eq!(
        summary(&params),
        "✔ Config loaded successfully\n\
         ✔ following /tmp/access.log\n\
         ✔ 12 slot alert window (120s every 10s)\n\
         ✔ alert above 1200 requests per window\n\
         ✔ top 5 entries per list\n\
         ✔ on rotation: Reopen\n"
    );
}

#[test]
fn window_problems_have_a_hint() {
    let err = ConfigError::WindowNotMultiple {
        interval: Duration::from_secs(7),
        window: Duration::from_secs(120),
    };

    let hint = config_error_hint(&err).unwrap();

    assert!(hint.contains("update_interval_secs = 10"));
}

#[test]
fn zero_top_k_has_no_hint() {
    assert!(config_error_hint(&ConfigError::ZeroTopK).is_none());
}

#[test]
fn aggregated_problems_share_hints_once() {
    let err = validated_params(&LogwatchConfig {
        time_window_secs: 125,
        update_interval_secs: 10,
        poll_interval_ms: 0,
        ..LogwatchConfig::default()
    })
    .unwrap_err();

    let hints = config_error_hints(&err);

    assert_eq!(hints.len(), 2);
    assert!(hints[0].contains("update_interval_secs = 10"));
    assert!(hints[1].contains("poll_interval_ms = 50"));
}
