use crate::conf::ConfigError;
use crate::monitor::MonitorParams;
use miette::Diagnostic;
use std::time::Duration;
use thiserror::Error;

const MAX_POLL_MILLIS: u128 = 1000;

#[derive(Default)]
pub struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("configuration validation failed")]
pub struct ValidationErrors(#[related] pub Vec<ConfigError>);

/// Reject parameter combinations the monitor cannot run with, reporting all of them.
pub fn validate_params(params: &MonitorParams) -> Result<(), ConfigError> {
    let mut ctx = ValidationCtx::default();

    let interval = params.update_interval;
    let window = params.time_window;

    if interval.is_zero() {
        ctx.push(ConfigError::ZeroUpdateInterval);
    } else if interval < Duration::from_millis(1) {
        ctx.push(ConfigError::SubMillisecondInterval { interval });
    }
    if window.is_zero() {
        ctx.push(ConfigError::ZeroTimeWindow);
    }

    if !interval.is_zero() && !window.is_zero() {
        if interval > window {
            ctx.push(ConfigError::IntervalExceedsWindow { interval, window });
        } else if window
            .as_millis()
            .checked_rem(interval.as_millis())
            .is_some_and(|rem| rem != 0)
        {
            ctx.push(ConfigError::WindowNotMultiple { interval, window });
        }
    }

    if params.top_k == 0 {
        ctx.push(ConfigError::ZeroTopK);
    }

    let poll = params.poll_interval.as_millis();
    if !(1..=MAX_POLL_MILLIS).contains(&poll) {
        ctx.push(ConfigError::InvalidPollInterval { millis: poll });
    }

    ctx.into_result()
        .map_err(|validation_errors| ConfigError::Validation { validation_errors })
}
