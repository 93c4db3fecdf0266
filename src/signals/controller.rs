//! Intersection phase controller
//!
//! Owns a traffic light per lane, the phase group table, the all-red
//! countdown, and the elapsed-time clock. One call to [`step`] advances
//! the whole intersection by one simulated second; the driver reads the
//! result back through [`snapshot`] and renders it.
//!
//! [`step`]: IntersectionController::step
//! [`snapshot`]: IntersectionController::snapshot

use anyhow::{bail, Result};
use log::debug;
use std::collections::HashMap;

use super::config::IntersectionConfig;
use super::light::TrafficLight;
use super::types::{LaneKey, LightColor, SignalTiming};

/// Read-only view of one lane's light, as exposed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSnapshot {
    pub key: LaneKey,
    pub color: LightColor,
    pub remaining_secs: i32,
}

/// The intersection's signal controller
///
/// Lanes are registered during a one-time configuration phase; after that
/// only light colors/timers, the active group index, the all-red countdown,
/// and the elapsed clock mutate, once per simulated second.
pub struct IntersectionController {
    lights: HashMap<LaneKey, TrafficLight>,

    /// Ordered phase groups partitioning all registered lane keys. Every
    /// registration appends its own single-lane group, so no two lanes
    /// ever share a green interval under the current schedule.
    phase_groups: Vec<Vec<LaneKey>>,

    /// Index into `phase_groups` of the group currently allowed to cycle.
    active_group: usize,

    /// Remaining seconds of the all-red interval. While above 1 the whole
    /// intersection is frozen.
    all_red_countdown: u32,

    /// Configured length of the all-red interval.
    all_red_secs: u32,

    /// Elapsed simulated seconds, advanced by the driver.
    elapsed_secs: u64,
}

impl IntersectionController {
    /// Create an empty controller; lanes are registered afterwards.
    pub fn new(all_red_secs: u32) -> Self {
        Self {
            lights: HashMap::new(),
            phase_groups: Vec::new(),
            active_group: 0,
            all_red_countdown: 0,
            all_red_secs,
            elapsed_secs: 0,
        }
    }

    /// Build a controller from a complete configuration, with the phase
    /// groups already sorted for simulation.
    pub fn from_config(config: &IntersectionConfig) -> Result<Self> {
        let mut controller = Self::new(config.all_red_secs);
        for lane in &config.lanes {
            controller.add_lane(lane.key(), lane.timing)?;
        }
        controller.sort_groups();
        Ok(controller)
    }

    /// Register a lane and give it its own phase group.
    ///
    /// Registering the same lane key twice is an error rather than a
    /// silent overwrite.
    pub fn add_lane(&mut self, key: LaneKey, timing: SignalTiming) -> Result<()> {
        if self.lights.contains_key(&key) {
            bail!("lane {} is already registered", key);
        }
        self.lights.insert(key, TrafficLight::new(timing));
        self.phase_groups.push(vec![key]);
        debug!("registered lane {} in its own phase group", key);
        Ok(())
    }

    /// Sort phase groups into descending lane-key order.
    ///
    /// Call after the last registration and before the first [`step`];
    /// the group order is fixed for the rest of the run.
    ///
    /// [`step`]: IntersectionController::step
    pub fn sort_groups(&mut self) {
        self.phase_groups.sort();
        self.phase_groups.reverse();
    }

    pub fn lane_count(&self) -> usize {
        self.lights.len()
    }

    pub fn group_count(&self) -> usize {
        self.phase_groups.len()
    }

    /// Index of the phase group currently allowed to cycle.
    pub fn active_group(&self) -> usize {
        self.active_group
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Advance the external-facing elapsed clock by one second.
    pub fn advance_elapsed_clock(&mut self) {
        self.elapsed_secs += 1;
    }

    /// Advance the intersection by one simulated second.
    ///
    /// During the bulk of the all-red interval nothing moves. Otherwise
    /// the active group's lights tick while every other lane is held at
    /// red, and once the whole intersection has gone idle the next group
    /// takes over behind a fresh all-red interval.
    pub fn step(&mut self) {
        if self.all_red_countdown > 1 {
            self.all_red_countdown -= 1;
            return;
        }

        for (key, light) in self.lights.iter_mut() {
            if self
                .phase_groups
                .get(self.active_group)
                .is_some_and(|group| group.contains(key))
            {
                light.advance_one_tick();
            } else if light.color() != LightColor::Red {
                light.force_red();
            }
        }

        // Rotation waits for global idle: every lane red with nothing on
        // its timer, not merely the active group finished.
        if !self.phase_groups.is_empty() && self.lights.values().all(TrafficLight::is_idle_red) {
            self.active_group = (self.active_group + 1) % self.phase_groups.len();
            self.all_red_countdown = self.all_red_secs;
            debug!(
                "phase rotation: group {} active, all-red for {}s",
                self.active_group, self.all_red_secs
            );
        }
    }

    /// Snapshot every lane's light in descending lane-key order.
    ///
    /// The order is stable across calls so the driver's rendering is
    /// reproducible run to run.
    pub fn snapshot(&self) -> Vec<LaneSnapshot> {
        let mut keys: Vec<LaneKey> = self.lights.keys().copied().collect();
        keys.sort();
        keys.reverse();
        keys.into_iter()
            .map(|key| {
                let light = &self.lights[&key];
                LaneSnapshot {
                    key,
                    color: light.color(),
                    remaining_secs: light.remaining_secs(),
                }
            })
            .collect()
    }
}
