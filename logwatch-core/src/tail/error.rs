use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file {path} was truncated")]
    Truncated { path: PathBuf },

    #[error("log file {path} was replaced")]
    Rotated { path: PathBuf },

    #[error("log file {path} disappeared")]
    Vanished { path: PathBuf },
}

impl TailError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
