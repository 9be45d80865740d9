use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scheduling and debounce tuning shared by the inbound controllers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Ticks between buffering an inbound frame and applying it.
    pub apply_delay_ticks: u64,
    /// How long after an apply echoed frames are absorbed.
    pub suppress_window: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            apply_delay_ticks: 5,
            suppress_window: Duration::from_millis(300),
        }
    }
}
