use crate::alert::window::AlertWindow;
use crate::monitor::MonitorParams;
use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertState {
    Normal,
    Alerting,
}

/// Emitted only when the alert state changes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct AlertRecord {
    /// `true` when entering the alert, `false` when recovering from it.
    pub alert: bool,
    /// Requests over the trailing window at the time of the transition.
    pub num_traffic: u64,
}

/// Sliding-window threshold detector with hysteresis.
///
/// The state flips to `Alerting` when the windowed total goes strictly above the limit and
/// back to `Normal` only once it goes strictly below it. A total equal to the limit never
/// causes a transition.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    window: AlertWindow,
    /// Thousandths of a request.
    limit_millis: u128,
    state: AlertState,
}

impl AlertEngine {
    pub fn new(slots: usize, limit: u64) -> Self {
        Self::with_limit_millis(slots, u128::from(limit) * 1000)
    }

    /// Limit taken from `threshold × time_window` without rounding, so fractional limits
    /// of sub-second windows still compare correctly.
    pub fn from_params(params: &MonitorParams) -> Self {
        Self::with_limit_millis(params.window_slots(), params.alert_limit_millis())
    }

    fn with_limit_millis(slots: usize, limit_millis: u128) -> Self {
        Self {
            window: AlertWindow::new(slots),
            limit_millis,
            state: AlertState::Normal,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(mut self, state: AlertState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn limit_millis(&self) -> u128 {
        self.limit_millis
    }

    pub fn window_total(&self) -> u64 {
        self.window.total()
    }

    /// Feed the request count of the interval that just ended.
    pub fn observe(&mut self, requests: u64) -> Option<AlertRecord> {
        self.window.record(requests);
        let total = self.window.total();
        let scaled = u128::from(total) * 1000;

        match self.state {
            AlertState::Normal if scaled > self.limit_millis => {
                self.state = AlertState::Alerting;
                Some(AlertRecord {
                    alert: true,
                    num_traffic: total,
                })
            }

            AlertState::Alerting if scaled < self.limit_millis => {
                self.state = AlertState::Normal;
                Some(AlertRecord {
                    alert: false,
                    num_traffic: total,
                })
            }

            _ => None,
        }
    }
}
