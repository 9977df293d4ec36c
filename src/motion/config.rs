use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for the lifecycle controller. The defaults are what the
/// site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Wait after mount before measuring, so first paint has landed.
    pub settle_delay_ms: u64,
    /// Quiet period that closes a burst of resize notifications.
    pub resize_debounce_ms: u64,
    /// Viewports narrower than this (px) count as low capability.
    pub low_capability_breakpoint: f64,
    /// Frame deltas are clamped to this, so a backgrounded tab does not
    /// snap every lagging scrub on return.
    pub max_frame_dt_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 400,
            resize_debounce_ms: 100,
            low_capability_breakpoint: 768.0,
            max_frame_dt_ms: 100,
        }
    }
}

impl MotionConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}
