//! Intersection Signal Timing Library
//!
//! Simulates the signal timing of a single road intersection: per-lane
//! traffic lights cycling RED -> GREEN -> YELLOW on independent timers,
//! phase groups rotating one at a time, and an all-red safety interval
//! inserted between phase changes. Runs headless; the binary drives it
//! once per simulated second and renders the state.

pub mod signals;
