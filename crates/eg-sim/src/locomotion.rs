//! The `Locomotion` trait — seam to the external force integrator.

use eg_agent::AgentStore;

/// Moves agents one step.
///
/// The driver calls this once per tick after the game has revised
/// strategies.  Implementations read `strategies` (indexed by `AgentId`)
/// to pick per-agent parameters, write `position`/`velocity`, and call
/// [`AgentStore::mark_at_goal`] for agents that passed the exit.
pub trait Locomotion<S> {
    fn advance(&mut self, agents: &mut AgentStore, strategies: &[S], dt: f64);
}

/// A [`Locomotion`] that never moves anyone.  Useful for studying the game
/// on a frozen crowd.
pub struct StaticCrowd;

impl<S> Locomotion<S> for StaticCrowd {
    fn advance(&mut self, _agents: &mut AgentStore, _strategies: &[S], _dt: f64) {}
}
