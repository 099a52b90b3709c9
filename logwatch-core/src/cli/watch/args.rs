use crate::conf::{ConfigError, LogwatchConfig, load_config};
use crate::logging::OutputMode;
use crate::tail::RotationPolicy;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// TOML config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Access log to follow [default: /tmp/access.log]
    #[arg(long)]
    pub logfile: Option<PathBuf>,

    /// Alert time window in seconds [default: 120]
    #[arg(long = "timewindow", value_name = "SECS")]
    pub time_window: Option<u64>,

    /// Alert threshold in requests per second [default: 10]
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Seconds between statistics updates [default: 10]
    #[arg(long = "updatefreq", value_name = "SECS")]
    pub update_interval: Option<u64>,

    /// Entries shown per top list [default: 5]
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Behaviour when the log file is truncated or replaced [default: reopen]
    #[arg(long, value_enum)]
    pub on_rotation: Option<RotationPolicy>,

    /// Sleep between reads at end of file, in milliseconds [default: 50]
    #[arg(long, value_name = "MS")]
    pub poll_ms: Option<u64>,

    /// Write synthetic traffic to the log file while monitoring it
    #[arg(long)]
    pub demo: bool,

    /// Dashboard on a terminal, JSON lines otherwise
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long)]
    pub trace_file: Option<PathBuf>,
}

impl RunArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<LogwatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => LogwatchConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut LogwatchConfig) {
        if let Some(path) = &self.logfile {
            config.log_file = path.clone();
        }
        if let Some(secs) = self.time_window {
            config.time_window_secs = secs;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(secs) = self.update_interval {
            config.update_interval_secs = secs;
        }
        if let Some(k) = self.top_k {
            config.top_k = k;
        }
        if let Some(policy) = self.on_rotation {
            config.on_rotation = policy;
        }
        if let Some(ms) = self.poll_ms {
            config.poll_interval_ms = ms;
        }
    }
}
