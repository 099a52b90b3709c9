use std::time::Duration;

/// Dashboard refresh period between stats updates, keeps the uptime current.
pub const RENDER_TICK: Duration = Duration::from_secs(1);
/// Intervals shown in the request sparkline.
pub const HISTORY_LEN: usize = 60;
/// Alert transitions kept on screen.
pub const ALERT_HISTORY: usize = 10;
