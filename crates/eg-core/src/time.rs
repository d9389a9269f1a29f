//! Simulation time model.
//!
//! The integrator advances in fixed steps of `dt` seconds.  `SimClock` keeps
//! both the integer step counter ([`Tick`]) and the accumulated simulated
//! time, so the game can read elapsed seconds while observers key their
//! output on exact iteration numbers.

use std::fmt;

use crate::{EgError, EgResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute iteration counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step clock: iteration count plus simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds per step.
    pub dt: f64,
    /// Simulated seconds elapsed since tick 0.
    pub time: f64,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, time: 0.0, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.time += self.dt;
    }

    /// Elapsed simulated seconds recomputed from the step count.
    ///
    /// Free of the rounding drift that accumulates in `time`.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Integrator step in seconds.  Must be finite and `> 0`.
    pub dt: f64,

    /// Hard stop: the run ends after this many ticks even if agents remain.
    pub max_iterations: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_iterations)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt)
    }

    pub fn validate(&self) -> EgResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(EgError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            max_iterations: 100_000,
            seed: 42,
            output_interval_ticks: 100,
        }
    }
}
