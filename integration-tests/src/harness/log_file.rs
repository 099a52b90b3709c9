use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `<host> - <user> [<timestamp>] "<method> <target> HTTP/1.0" <status> <bytes>`
pub fn access_line(method: &str, target: &str, status: &str, bytes: &str) -> String {
    format!(
        "1.2.3.4 - mary [01/Jan/2020:00:00:00 +0000] \"{method} {target} HTTP/1.0\" {status} {bytes}"
    )
}

/// Append `lines` in a single write.
pub fn append_lines<S: AsRef<str>>(path: &Path, lines: &[S]) {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .expect("failed to open log file");

    let mut buf = String::new();
    for line in lines {
        buf.push_str(line.as_ref());
        buf.push('\n');
    }
    file.write_all(buf.as_bytes())
        .expect("failed to append to log file");
}

/// An access log in a temporary directory, removed on drop.
pub struct TestLog {
    dir: TempDir,
    path: PathBuf,
}

impl TestLog {
    pub fn new() -> Self {
        Self::with_content("")
    }

    pub fn with_content(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");
        fs::write(&path, content).expect("failed to create log file");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path inside the same directory that does not exist.
    pub fn missing(&self) -> PathBuf {
        self.dir.path().join("missing.log")
    }

    pub fn append<S: AsRef<str>>(&self, lines: &[S]) {
        append_lines(&self.path, lines);
    }

    pub fn truncate(&self) {
        fs::write(&self.path, "").expect("failed to truncate log file");
    }

    /// Move the current file aside and start a new one at the same path.
    pub fn rotate(&self) {
        fs::rename(&self.path, self.dir.path().join("access.log.1"))
            .expect("failed to move log file aside");
        fs::write(&self.path, "").expect("failed to create new log file");
    }
}

impl Default for TestLog {
    fn default() -> Self {
        Self::new()
    }
}
