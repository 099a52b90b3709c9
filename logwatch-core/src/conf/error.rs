use crate::conf::validation::ValidationErrors;
use miette::Diagnostic;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed")]
    Validation {
        #[diagnostic_source]
        validation_errors: ValidationErrors,
    },

    //-------------------------------------------------------------------------
    // Window / interval
    //-------------------------------------------------------------------------
    #[error("update interval must be greater than zero")]
    ZeroUpdateInterval,

    #[error("time window must be greater than zero")]
    ZeroTimeWindow,

    #[error("update interval ({interval:?}) is shorter than one millisecond")]
    #[diagnostic(help = "intervals and windows are counted in whole milliseconds")]
    SubMillisecondInterval { interval: Duration },

    #[error("update interval ({interval:?}) exceeds the time window ({window:?})")]
    IntervalExceedsWindow { interval: Duration, window: Duration },

    #[error("time window ({window:?}) is not a whole multiple of the update interval ({interval:?})")]
    WindowNotMultiple { interval: Duration, window: Duration },

    //-------------------------------------------------------------------------
    // Reporting / tailing
    //-------------------------------------------------------------------------
    #[error("top_k must be at least 1")]
    ZeroTopK,

    #[error("poll interval must be between 1 and 1000 ms, got {millis} ms")]
    InvalidPollInterval { millis: u128 },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Individual problems, whether or not they were aggregated.
    pub fn problems(&self) -> Vec<&ConfigError> {
        match self {
            ConfigError::Validation { validation_errors } => validation_errors.0.iter().collect(),
            other => vec![other],
        }
    }
}
