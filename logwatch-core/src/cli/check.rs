use crate::conf::{ConfigError, LogwatchConfig, load_config, validated_params};
use crate::monitor::MonitorParams;
use miette::Report;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: Option<&Path>, plain: bool) -> anyhow::Result<()> {
    let config = match path {
        Some(path) => load_config(path),
        None => Ok(LogwatchConfig::default()),
    };

    match config.and_then(|config| validated_params(&config)) {
        Ok(params) => {
            print!("{}", summary(&params));
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

pub fn summary(params: &MonitorParams) -> String {
    format!(
        "✔ Config loaded successfully\n\
         ✔ following {}\n\
         ✔ {} slot alert window ({}s every {}s)\n\
         ✔ alert above {} requests per window\n\
         ✔ top {} entries per list\n\
         ✔ on rotation: {:?}\n",
        params.log_file.display(),
        params.window_slots(),
        params.time_window.as_secs_f64(),
        params.update_interval.as_secs_f64(),
        params.alert_limit(),
        params.top_k,
        params.on_rotation,
    )
}

pub(crate) fn print_config_error(err: ConfigError, plain: bool) {
    let hints = config_error_hints(&err);
    if plain {
        for problem in err.problems() {
            eprintln!("{} {}", "✘".red(), problem);
        }
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    for hint in hints {
        eprintln!();
        eprintln!("{hint}");
    }
}

/// Hints for every problem in `err`, each listed once.
pub fn config_error_hints(err: &ConfigError) -> Vec<&'static str> {
    let mut hints = Vec::new();
    for hint in err.problems().into_iter().filter_map(config_error_hint) {
        if !hints.contains(&hint) {
            hints.push(hint);
        }
    }
    hints
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::IntervalExceedsWindow { .. } | ConfigError::WindowNotMultiple { .. } => Some(
            "The alert window is split into update intervals.\n\
             \n\
             Example:\n\
             \n\
             time_window_secs     = 120\n\
             update_interval_secs = 10",
        ),

        ConfigError::InvalidPollInterval { .. } => Some(
            "The poll interval bounds how long the reader sleeps at end of file.\n\
             \n\
             Use a value in the tens of milliseconds, e.g. poll_interval_ms = 50",
        ),

        ConfigError::Parse { .. } => Some(
            "Known keys: log_file, time_window_secs, threshold, update_interval_secs,\n\
             top_k, on_rotation (\"reopen\" or \"fail\"), poll_interval_ms",
        ),

        _ => None,
    }
}
