//! Exit geometry.

use crate::{EgError, EgResult, Vec2};

/// A single exit door: a line segment plus its throughput.
///
/// The game only needs a reference point to measure proximity against and
/// the throughput (agents per second) used to turn a queue position into a
/// time estimate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitDoor {
    pub start: Vec2,
    pub end: Vec2,
    /// Agents passing through the door per unit time.  Always `> 0`.
    pub capacity: f64,
}

impl ExitDoor {
    /// Build a door, rejecting a non-positive or non-finite capacity.
    pub fn new(start: Vec2, end: Vec2, capacity: f64) -> EgResult<Self> {
        if !(capacity.is_finite() && capacity > 0.0) {
            return Err(EgError::Config(format!(
                "exit capacity must be positive, got {capacity}"
            )));
        }
        if !(start.is_finite() && end.is_finite()) {
            return Err(EgError::Config("exit door endpoints must be finite".into()));
        }
        Ok(Self { start, end, capacity })
    }

    /// Midpoint of the door segment.
    #[inline]
    pub fn reference_point(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.start.distance(self.end)
    }
}
