//! Configuration: a TOML file, command-line overrides and the validation that turns them
//! into [`MonitorParams`](crate::monitor::MonitorParams).

mod error;
mod loader;
mod types;
mod validation;


pub use error::ConfigError;
pub use loader::{load_config, validated_params};
pub use types::{DEFAULT_LOG_FILE, LogwatchConfig};
pub use validation::{ValidationCtx, ValidationErrors, validate_params};
