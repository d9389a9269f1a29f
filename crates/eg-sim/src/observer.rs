//! Simulation observer trait for progress reporting and data collection.

use eg_agent::AgentStore;
use eg_core::Tick;
use eg_game::RevisionSummary;

use crate::RunStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.  `S` is the game's strategy type.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver<Strategy> for Progress {
///     fn on_tick_end(&mut self, stats: &RunStats, _: &RevisionSummary) {
///         println!("{}: {} out", stats.iterations, stats.agents_at_goal);
///     }
/// }
/// ```
pub trait SimObserver<S> {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the updated statistics and what
    /// the game did this tick.
    fn on_tick_end(&mut self, _stats: &RunStats, _revisions: &RevisionSummary) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to agent state and the current strategies.
    fn on_snapshot(&mut self, _stats: &RunStats, _agents: &AgentStore, _strategies: &[S]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl<S> SimObserver<S> for NoopObserver {}
