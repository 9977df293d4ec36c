use serde::{Deserialize, Serialize};

/// Platform signals the capability snapshot is built from.
pub trait Platform {
    fn prefers_reduced_motion(&self) -> bool;
    fn coarse_pointer(&self) -> bool;
    fn viewport_width(&self) -> f64;
}

/// Mount-wide snapshot; never recomputed while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityProfile {
    pub reduced_motion: bool,
    pub low_capability: bool,
}

/// Touch-primary or narrower than `breakpoint` counts as low capability.
pub fn detect(platform: &impl Platform, breakpoint: f64) -> CapabilityProfile {
    CapabilityProfile {
        reduced_motion: platform.prefers_reduced_motion(),
        low_capability: platform.coarse_pointer() || platform.viewport_width() < breakpoint,
    }
}
