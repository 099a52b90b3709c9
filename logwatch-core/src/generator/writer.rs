use crate::generator::{GeneratorError, RateWave, generate_line};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub const DEFAULT_START_INTERVAL: Duration = Duration::from_secs(4);

/// Append one line (plus newline) to `path`, creating the file if needed.
///
/// The file is opened per call so that external rotation is picked up.
pub async fn append_line(path: &Path, line: &str) -> Result<(), GeneratorError> {
    let write_err = |source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(write_err)?;

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    file.write_all(buf.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)
}

pub struct LogGenerator {
    path: PathBuf,
    start_interval: Duration,
    wave: RateWave,
}

impl LogGenerator {
    pub fn new(path: impl Into<PathBuf>, start_interval: Duration) -> Self {
        Self {
            path: path.into(),
            start_interval,
            wave: RateWave::new(start_interval),
        }
    }

    /// Write lines until cancelled. Returns how many were written.
    pub async fn run(mut self, cancel: CancellationToken) -> Result<u64, GeneratorError> {
        info!(path = %self.path.display(), "generating demo traffic");

        let mut delay = self.start_interval;
        let mut written = 0u64;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }

            let (line, next) = self.next_line();
            append_line(&self.path, &line).await?;
            written += 1;
            delay = next;
        }

        debug!(lines = written, "generator stopped");
        Ok(written)
    }

    // The thread-local rng is not Send, so it never lives across an await.
    fn next_line(&mut self) -> (String, Duration) {
        let mut rng = rand::rng();
        let line = generate_line(&mut rng, &chrono::Local::now());
        let delay = self.wave.next_delay(rng.random());
        (line, delay)
    }
}
