use std::time::Duration;

const START_DIVISOR: f64 = 5.0;
const LOW_DIVISOR: f64 = 10.0;
const HIGH_DIVISOR: f64 = 100.0;
const STEP: f64 = 0.1;
const MAX_JITTER_MS: f64 = 50.0;

/// Delay schedule shaped like a triangle wave.
///
/// The delay is `base / divisor` plus up to 50 ms of jitter. The divisor climbs by 0.1 per
/// line until it passes 100, then falls until it drops below 10, and so on.
#[derive(Debug, Clone)]
pub struct RateWave {
    base_ms: f64,
    divisor: f64,
    step: f64,
}

impl RateWave {
    pub fn new(base: Duration) -> Self {
        Self {
            base_ms: base.as_secs_f64() * 1000.0,
            divisor: START_DIVISOR,
            step: STEP,
        }
    }

    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Delay before the next line. `jitter` is expected in `[0, 1)`.
    pub fn next_delay(&mut self, jitter: f64) -> Duration {
        let ms = self.base_ms / self.divisor + jitter.clamp(0.0, 1.0) * MAX_JITTER_MS;

        if self.divisor > HIGH_DIVISOR {
            self.step = -STEP;
        }
        if self.divisor < LOW_DIVISOR {
            self.step = STEP;
        }
        self.divisor += self.step;

        Duration::from_micros((ms * 1000.0).round() as u64)
    }
}
