//! Per-lane traffic light state machine
//!
//! A light owns a countdown timer and a color, and advances through the
//! fixed RED -> GREEN -> YELLOW -> RED cycle. The controller is the only
//! caller; a light knows nothing about phases or other lanes.

use super::types::{LightColor, SignalTiming};

/// A single lane's traffic light
///
/// Starts red with the timer at zero, i.e. ready to turn green on the
/// first tick its group is active.
#[derive(Debug, Clone)]
pub struct TrafficLight {
    timing: SignalTiming,
    color: LightColor,
    timer: i32,
}

impl TrafficLight {
    pub fn new(timing: SignalTiming) -> Self {
        Self {
            timing,
            color: LightColor::Red,
            timer: 0,
        }
    }

    pub fn color(&self) -> LightColor {
        self.color
    }

    /// Seconds remaining in the current color. Never negative between ticks.
    pub fn remaining_secs(&self) -> i32 {
        self.timer
    }

    /// Advance this light by one simulated second.
    ///
    /// The color changes only once the timer goes negative, not when it
    /// reaches zero, so a duration of N is displayed for N+1 ticks. This
    /// off-by-one is kept deliberately for compatibility with the existing
    /// timing plans; see the cycle tests that pin it down.
    pub fn advance_one_tick(&mut self) {
        self.timer -= 1;
        if self.timer < 0 {
            self.advance_state();
        }
    }

    /// Force this light to red with its timer cleared.
    ///
    /// Used by the controller to hold lanes outside the active phase group
    /// at red regardless of where their own cycle left off.
    pub fn force_red(&mut self) {
        self.color = LightColor::Red;
        self.timer = 0;
    }

    /// Whether this light sits at red with nothing left on its timer.
    /// The controller's rotation condition checks this across all lanes.
    pub fn is_idle_red(&self) -> bool {
        self.color == LightColor::Red && self.timer == 0
    }

    fn advance_state(&mut self) {
        match self.color {
            LightColor::Red => {
                self.color = LightColor::Green;
                self.timer = self.timing.green_secs as i32;
            }
            LightColor::Green => {
                self.color = LightColor::Yellow;
                self.timer = self.timing.yellow_secs as i32;
            }
            LightColor::Yellow => {
                self.color = LightColor::Red;
                // Red carries no duration of its own; the phase schedule
                // decides how long the lane stays red.
                self.timer = 0;
            }
        }
    }
}
