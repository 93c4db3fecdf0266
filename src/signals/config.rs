//! Intersection configuration
//!
//! The driver collects input (CLI flags or console prompts), builds an
//! [`IntersectionConfig`], and hands it to the controller's constructor.
//! No core component reads configuration from anywhere else.

use super::types::{Lane, LaneKey, SignalTiming};

/// One lane registration: which lane, and the timings its light cycles on.
#[derive(Debug, Clone, Copy)]
pub struct LaneConfig {
    pub lane: Lane,
    pub timing: SignalTiming,
}

impl LaneConfig {
    pub fn new(lane: Lane, timing: SignalTiming) -> Self {
        Self { lane, timing }
    }

    pub fn key(&self) -> LaneKey {
        self.lane.key
    }
}

/// Full configuration for one intersection controller.
#[derive(Debug, Clone)]
pub struct IntersectionConfig {
    /// Length of the all-red safety interval between phase changes.
    pub all_red_secs: u32,
    pub lanes: Vec<LaneConfig>,
}

impl IntersectionConfig {
    /// Default all-red interval, in seconds.
    pub const DEFAULT_ALL_RED_SECS: u32 = 4;

    pub fn new(all_red_secs: u32) -> Self {
        Self {
            all_red_secs,
            lanes: Vec::new(),
        }
    }

    pub fn with_lane(mut self, lane: Lane, timing: SignalTiming) -> Self {
        self.lanes.push(LaneConfig::new(lane, timing));
        self
    }
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALL_RED_SECS)
    }
}
