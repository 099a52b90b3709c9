use clap::{Parser, Subcommand};
use logwatch_core::cli::watch::{self, RunArgs};
use logwatch_core::cli::{check, generate};
use logwatch_core::conf::DEFAULT_LOG_FILE;
use logwatch_core::logging::init_logging;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "logwatch",
    version,
    about = "logwatch: live HTTP access log monitor with traffic alerts"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow an access log and report traffic (default)
    Run(RunArgs),

    /// Validate a config file and print the resulting settings
    Check {
        /// Path to the logwatch config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print problems without fancy formatting
        #[arg(long)]
        plain: bool,
    },

    /// Append synthetic access log lines until interrupted
    Generate {
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        logfile: PathBuf,

        /// Initial delay between lines, in milliseconds
        #[arg(long, default_value_t = 4000)]
        start_interval_ms: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run(args)) => {
            let _guard = init_logging(args.trace_file.as_deref());
            watch::run(args)
        }

        Some(Command::Check { config, plain }) => check::check(config.as_deref(), plain),

        Some(Command::Generate {
            logfile,
            start_interval_ms,
        }) => {
            let _guard = init_logging(None);
            generate::generate(logfile, Duration::from_millis(start_interval_ms))
        }

        None => {
            let _guard = init_logging(None);
            watch::run(RunArgs::default())
        }
    }
}
