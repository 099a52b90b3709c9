mod log_file;
pub mod monitor;
pub mod tracing;

pub use log_file::{TestLog, access_line, append_lines};
pub use monitor::{TestMonitor, fast_params};
pub use self::tracing::{CapturedEvent, init_test_tracing};
