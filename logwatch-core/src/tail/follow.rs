use crate::tail::{RotationPolicy, TailError};
use std::fs::Metadata;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Device and inode of an open file, used to notice when the path points somewhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FileIdentity {
    dev: u64,
    ino: u64,
}

impl FileIdentity {
    #[cfg(unix)]
    fn of(meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            dev: meta.dev(),
            ino: meta.ino(),
        }
    }

    // Replacement is only detectable through truncation here.
    #[cfg(not(unix))]
    fn of(_meta: &Metadata) -> Self {
        Self::default()
    }
}

/// Reader positioned at the end of a log file, yielding lines appended after it was opened.
pub struct LogTail {
    path: PathBuf,
    reader: BufReader<File>,
    identity: FileIdentity,
    /// Offset of the next unread byte in the current file.
    position: u64,
    /// Bytes of a line whose terminator has not been written yet.
    partial: Vec<u8>,
    poll_interval: Duration,
    policy: RotationPolicy,
}

impl LogTail {
    /// Open `path` and skip everything already in it.
    pub async fn open(
        path: impl AsRef<Path>,
        poll_interval: Duration,
        policy: RotationPolicy,
    ) -> Result<Self, TailError> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::open(&path)
            .await
            .map_err(|e| TailError::open(&path, e))?;
        let position = file
            .seek(SeekFrom::End(0))
            .await
            .map_err(|e| TailError::open(&path, e))?;
        let meta = file
            .metadata()
            .await
            .map_err(|e| TailError::open(&path, e))?;

        info!(path = %path.display(), offset = position, ?policy, "following log file");

        Ok(Self {
            identity: FileIdentity::of(&meta),
            reader: BufReader::new(file),
            path,
            position,
            partial: Vec::new(),
            poll_interval,
            policy,
        })
    }

    /// Wait for the next complete line, without its terminator.
    ///
    /// Returns `Ok(None)` once `cancel` fires; both the read and the sleep between polls
    /// race against it.
    pub async fn next_line(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, TailError> {
        loop {
            let read = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(None),
                read = self.reader.read_until(b'\n', &mut self.partial) => read,
            };
            let n = read.map_err(|e| TailError::read(&self.path, e))?;
            self.position += n as u64;

            if self.partial.last() == Some(&b'\n') {
                return Ok(Some(self.take_line()));
            }

            if n == 0 {
                self.check_source().await?;

                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Ok(None),
                    _ = tokio::time::sleep(self.poll_interval) => {}
                }
            }
        }
    }

    fn take_line(&mut self) -> String {
        let mut bytes = std::mem::take(&mut self.partial);
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Compare the open handle with what the path currently points at.
    async fn check_source(&mut self) -> Result<(), TailError> {
        let meta = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return match self.policy {
                    RotationPolicy::Fail => Err(TailError::Vanished {
                        path: self.path.clone(),
                    }),
                    // Keep polling until a new file shows up at the path.
                    RotationPolicy::Reopen => Ok(()),
                };
            }
            Err(e) => return Err(TailError::read(&self.path, e)),
        };

        if FileIdentity::of(&meta) != self.identity {
            return match self.policy {
                RotationPolicy::Fail => Err(TailError::Rotated {
                    path: self.path.clone(),
                }),
                RotationPolicy::Reopen => {
                    warn!(path = %self.path.display(), "log file replaced, reopening");
                    self.reopen().await
                }
            };
        }

        if meta.len() < self.position {
            return match self.policy {
                RotationPolicy::Fail => Err(TailError::Truncated {
                    path: self.path.clone(),
                }),
                RotationPolicy::Reopen => {
                    warn!(
                        path = %self.path.display(),
                        len = meta.len(),
                        offset = self.position,
                        "log file truncated, rewinding"
                    );
                    self.rewind().await
                }
            };
        }

        Ok(())
    }

    /// Switch to the file now at the path and read it from the start.
    async fn reopen(&mut self) -> Result<(), TailError> {
        let file = match File::open(&self.path).await {
            Ok(file) => file,
            // Removed again before we got to it; the next poll retries.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(TailError::open(&self.path, e)),
        };
        let meta = file
            .metadata()
            .await
            .map_err(|e| TailError::read(&self.path, e))?;

        self.identity = FileIdentity::of(&meta);
        self.reader = BufReader::new(file);
        self.position = 0;
        self.discard_partial();
        Ok(())
    }

    async fn rewind(&mut self) -> Result<(), TailError> {
        self.reader
            .seek(SeekFrom::Start(0))
            .await
            .map_err(|e| TailError::read(&self.path, e))?;
        self.position = 0;
        self.discard_partial();
        Ok(())
    }

    fn discard_partial(&mut self) {
        if !self.partial.is_empty() {
            debug!(bytes = self.partial.len(), "dropping unterminated line");
            self.partial.clear();
        }
    }
}
