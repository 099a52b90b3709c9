use serde::{Deserialize, Serialize};

/// What to do when the followed file is truncated, replaced or removed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// Reopen the path (or rewind a truncated file) and keep following.
    #[default]
    Reopen,
    /// Stop with an error.
    Fail,
}
