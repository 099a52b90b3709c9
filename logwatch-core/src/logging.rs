use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize JSON logging with environment-based filtering (defaults to "info").
///
/// Logs go to stderr so they never interleave with the dashboard on stdout, or to
/// `log_file` when one is given. The returned guard flushes the file writer on drop and must
/// be held until the program exits.
pub fn init_normal_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).json().flatten_event(true);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or(path.as_os_str());

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            builder.with_writer(writer).with_ansi(false).init();
            Some(guard)
        }
        None => {
            builder.with_writer(io::stderr).init();
            None
        }
    }
}

pub fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    // If tokio-console is enabled, DO NOT install the normal subscriber
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        init_console_logging();
        None
    } else {
        init_normal_logging(log_file)
    }
}

fn init_console_logging() {
    console_subscriber::init();
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Dashboard
    } else {
        OutputMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Redrawn text dashboard.
    Dashboard,
    /// One JSON object per record on stdout.
    Json,
}
