use crate::conf::validation::validate_params;
use crate::conf::{ConfigError, LogwatchConfig};
use crate::monitor::MonitorParams;
use std::fs;
use std::path::Path;

/// Read a TOML config file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<LogwatchConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))
}

/// Check every parameter and return the ones the monitor runs with.
pub fn validated_params(config: &LogwatchConfig) -> Result<MonitorParams, ConfigError> {
    let params = config.to_params();
    validate_params(&params)?;
    Ok(params)
}
