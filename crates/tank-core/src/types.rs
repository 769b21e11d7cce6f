//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in arena space (world units).
/// x = East, y = Up, z = South. The ground is the XZ plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in arena space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each playing tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Distance on the ground plane (ignoring height).
    pub fn ground_distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Unit vector pointing from `self` toward `other`, or `None` when the
    /// two positions coincide.
    pub fn direction_to(&self, other: &Position) -> Option<DVec3> {
        (DVec3::from(*other) - DVec3::from(*self)).try_normalize()
    }

    /// Offset this position by `velocity * dt`.
    pub fn advanced(&self, velocity: &Velocity, dt: f64) -> Position {
        (DVec3::from(*self) + DVec3::from(*velocity) * dt).into()
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Velocity of magnitude `speed` along `direction` (expected normalized).
    pub fn along(direction: DVec3, speed: f64) -> Self {
        (direction * speed).into()
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Scale every component by `factor`.
    pub fn scaled(&self, factor: f64) -> Velocity {
        (DVec3::from(*self) * factor).into()
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl From<Position> for DVec3 {
    fn from(p: Position) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Position::new(v.x, v.y, v.z)
    }
}

impl From<Velocity> for DVec3 {
    fn from(v: Velocity) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Velocity {
    fn from(v: DVec3) -> Self {
        Velocity::new(v.x, v.y, v.z)
    }
}
