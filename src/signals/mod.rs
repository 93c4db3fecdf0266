//! Standalone signal timing module
//!
//! This module contains all the core signal timing logic. It has no I/O:
//! the driver binary collects configuration, calls the controller once per
//! simulated second, and renders the snapshots it exposes.

mod config;
mod controller;
mod light;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use config::{IntersectionConfig, LaneConfig};
#[allow(unused_imports)]
pub use controller::{IntersectionController, LaneSnapshot};
#[allow(unused_imports)]
pub use light::TrafficLight;
#[allow(unused_imports)]
pub use types::{Direction, Lane, LaneKey, LaneType, LightColor, SignalTiming};
