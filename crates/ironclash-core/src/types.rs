//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (units). x grows east, y grows south.
pub type Position = DVec2;

/// 2D velocity in arena units per step.
pub type Velocity = DVec2;

/// Axis-aligned rectangle, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Elapsed steps (increments by 1 at the start of each step).
    pub step: u64,
}

impl Bounds {
    pub const fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Clamp a position into the rectangle, axis by axis.
    pub fn clamp(&self, position: Position) -> Position {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }
}

impl SimTime {
    /// Seconds per step at the nominal step rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Wall-clock seconds represented by the elapsed steps.
    pub fn elapsed_secs(&self) -> f64 {
        self.step as f64 * self.dt()
    }

    /// Advance by one step.
    pub fn advance(&mut self) {
        self.step += 1;
    }
}

/// Heading in radians from `from` toward `to` (0 = +x, counter-clockwise toward +y).
pub fn heading_to(from: Position, to: Position) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Unit vector for a heading in radians.
pub fn unit_from_heading(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin())
}
