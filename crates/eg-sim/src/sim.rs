//! The `Sim` struct and its tick loop.

use eg_agent::AgentStore;
use eg_core::{SimClock, SimConfig, SimRng};
use eg_game::{RevisionSummary, SpatialGame, TickInput};

use crate::{Locomotion, RunStats, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<G, L>` holds all run state and drives the tick loop described in the
/// crate docs.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<G, L> {
    /// Run configuration (step, iteration cap, seed, …).
    pub config: SimConfig,

    /// Step counter and simulated time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  The game reads it; locomotion writes it.
    pub agents: AgentStore,

    /// The strategy game.  Sole writer of the strategy array.
    pub game: G,

    /// External integrator.
    pub locomotion: L,

    /// Revision order and revision clock, seeded from `config.seed`.
    pub rng: SimRng,

    /// When set, used as `t_aset` every tick instead of the countdown.
    pub t_aset_override: Option<f64>,

    pub(crate) stats: RunStats,
}

impl<G, L> Sim<G, L>
where
    G: SpatialGame,
    L: Locomotion<G::Strategy>,
{
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every agent has left or `config.max_iterations` ticks have
    /// been taken, whichever comes first.
    ///
    /// A failing game update aborts the run with the game's error; the
    /// aborted tick is not counted.
    pub fn run<O: SimObserver<G::Strategy>>(&mut self, observer: &mut O) -> SimResult<RunStats> {
        tracing::info!(
            agents = self.agents.count,
            max_iterations = self.config.max_iterations,
            dt = self.config.dt,
            seed = self.config.seed,
            "starting run"
        );

        while self.clock.current_tick < self.config.end_tick() && self.stats.active > 0 {
            self.step(observer)?;
        }

        observer.on_sim_end(&self.stats);
        tracing::info!(
            iterations = self.stats.iterations.0,
            elapsed = self.stats.elapsed,
            at_goal = self.stats.agents_at_goal,
            remaining = self.stats.active,
            "run finished"
        );
        Ok(self.stats)
    }

    /// Run exactly `n` ticks from the current position, ignoring the
    /// iteration cap and the all-out condition.
    pub fn run_ticks<O: SimObserver<G::Strategy>>(&mut self, n: u64, observer: &mut O) -> SimResult<RunStats> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(self.stats)
    }

    /// Statistics as of the last completed tick.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Current strategies, indexed by `AgentId`.
    pub fn strategies(&self) -> &[G::Strategy] {
        self.game.strategies()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver<G::Strategy>>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let revisions = self.process_tick()?;
        self.clock.advance();
        self.refresh_stats();

        observer.on_tick_end(&self.stats, &revisions);
        if self.config.output_interval_ticks > 0
            && now.0 % self.config.output_interval_ticks == 0
        {
            observer.on_snapshot(&self.stats, &self.agents, self.game.strategies());
        }
        Ok(())
    }

    fn process_tick(&mut self) -> SimResult<RevisionSummary> {
        // ── Phase 1: neighbour rows from current positions ───────────────
        self.agents.update_neighbors();

        // ── Phase 2: strategy revision (sequential) ──────────────────────
        let tick = TickInput {
            simulation_time: self.clock.time,
            dt:              self.clock.dt,
            t_aset_override: self.t_aset_override,
        };
        let revisions = self.game.update(&self.agents, tick, &mut self.rng)?;

        // ── Phase 3: move agents under their new strategies ──────────────
        self.locomotion
            .advance(&mut self.agents, self.game.strategies(), self.clock.dt);

        tracing::debug!(
            tick = self.clock.current_tick.0,
            time = self.clock.time,
            players = revisions.players,
            revised = revisions.revised,
            switched = revisions.switched,
            "tick processed"
        );
        Ok(revisions)
    }

    fn refresh_stats(&mut self) {
        self.stats = RunStats {
            iterations:     self.clock.current_tick,
            elapsed:        self.clock.time,
            agents_at_goal: self.agents.at_goal_count(),
            active:         self.agents.active_count(),
        };
    }
}
