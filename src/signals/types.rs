//! Core value types for the signal timing simulation
//!
//! These are small standalone types: lane identity, signal colors, and the
//! immutable timing record a light cycles against.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// Approach direction of a lane.
///
/// Variant order matters: lane snapshots are rendered in descending
/// `LaneKey` order, and this ordering puts NS ahead of EW there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    EW,
    NS,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::NS => write!(f, "NS"),
            Direction::EW => write!(f, "EW"),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NS" => Ok(Direction::NS),
            "EW" => Ok(Direction::EW),
            other => bail!("unknown direction '{}' (expected 'NS' or 'EW')", other),
        }
    }
}

/// The kind of movement a lane serves.
///
/// Variant order matters for the same reason as [`Direction`]: descending
/// key order lists through lanes before left-turn lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneType {
    LeftTurn,
    Through,
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneType::Through => write!(f, "through"),
            LaneType::LeftTurn => write!(f, "left-turn"),
        }
    }
}

impl FromStr for LaneType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "through" => Ok(LaneType::Through),
            "left-turn" => Ok(LaneType::LeftTurn),
            other => bail!(
                "unknown lane type '{}' (expected 'through' or 'left-turn')",
                other
            ),
        }
    }
}

/// Identity of a lane: direction plus lane type
///
/// Used as the controller's map key and as the sort key for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneKey {
    pub direction: Direction,
    pub lane_type: LaneType,
}

impl LaneKey {
    pub fn new(direction: Direction, lane_type: LaneType) -> Self {
        Self {
            direction,
            lane_type,
        }
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.direction, self.lane_type)
    }
}

impl FromStr for LaneKey {
    type Err = anyhow::Error;

    /// Parses a `DIR:TYPE` lane spec, e.g. `NS:through` or `EW:left-turn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((direction, lane_type)) = s.split_once(':') else {
            bail!(
                "invalid lane spec '{}' (expected DIR:TYPE, e.g. 'NS:through')",
                s
            );
        };
        Ok(LaneKey::new(direction.parse()?, lane_type.parse()?))
    }
}

/// A lane of the intersection
///
/// Purely descriptive; all behavior lives in the light that is keyed by
/// the lane's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub key: LaneKey,
}

impl Lane {
    pub fn new(direction: Direction, lane_type: LaneType) -> Self {
        Self {
            key: LaneKey::new(direction, lane_type),
        }
    }
}

/// Current color of a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightColor {
    Red,
    Green,
    Yellow,
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightColor::Red => write!(f, "RED"),
            LightColor::Green => write!(f, "GREEN"),
            LightColor::Yellow => write!(f, "YELLOW"),
        }
    }
}

/// Immutable green/yellow durations for one lane's light
///
/// Red has no stored duration: how long a lane stays red falls out of the
/// phase schedule (a light enters red with its timer at zero and is held
/// there until its group becomes active again).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTiming {
    pub green_secs: u32,
    pub yellow_secs: u32,
}

impl SignalTiming {
    pub fn new(green_secs: u32, yellow_secs: u32) -> Self {
        Self {
            green_secs,
            yellow_secs,
        }
    }
}
