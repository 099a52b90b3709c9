use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to append to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
