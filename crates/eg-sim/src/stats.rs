//! Run statistics owned by the driver.

use eg_core::Tick;

/// Counters read by observers and the visualization layer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Ticks completed.
    pub iterations: Tick,
    /// Simulated seconds elapsed.
    pub elapsed: f64,
    /// Agents that passed the exit.
    pub agents_at_goal: usize,
    /// Agents still in the domain.
    pub active: usize,
}
