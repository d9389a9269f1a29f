//! Fluent builder for constructing a [`Sim`].

use eg_agent::AgentStore;
use eg_core::{SimConfig, SimRng};
use eg_game::SpatialGame;

use crate::{Locomotion, RunStats, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<G, L>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — step, iteration cap, seed, snapshot interval
/// - [`AgentStore`] — from [`eg_agent::AgentStoreBuilder`]
/// - `G: SpatialGame` — built against the same store (e.g.
///   [`eg_game::EgressGame::new`])
/// - `L: Locomotion` — the integrator
///
/// # Optional inputs
///
/// | Method                  | Default                       |
/// |-------------------------|-------------------------------|
/// | `.t_aset_override(t)`   | `t_aset_0 - simulation_time`  |
pub struct SimBuilder<G, L> {
    config:          SimConfig,
    agents:          AgentStore,
    game:            G,
    locomotion:      L,
    t_aset_override: Option<f64>,
}

impl<G, L> SimBuilder<G, L>
where
    G: SpatialGame,
    L: Locomotion<G::Strategy>,
{
    pub fn new(config: SimConfig, agents: AgentStore, game: G, locomotion: L) -> Self {
        Self { config, agents, game, locomotion, t_aset_override: None }
    }

    /// Feed a fixed available safe egress time to every tick.
    pub fn t_aset_override(mut self, t_aset: f64) -> Self {
        self.t_aset_override = Some(t_aset);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<G, L>> {
        self.config.validate()?;

        let agent_count = self.agents.count;
        let strategies = self.game.strategies().len();
        if strategies != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      strategies,
                what:     "game strategies",
            });
        }
        if let Some(t) = self.t_aset_override.filter(|t| !t.is_finite()) {
            return Err(SimError::Config(format!("t_aset override must be finite, got {t}")));
        }

        let stats = RunStats {
            active: self.agents.active_count(),
            agents_at_goal: self.agents.at_goal_count(),
            ..RunStats::default()
        };

        Ok(Sim {
            clock:           self.config.make_clock(),
            rng:             SimRng::new(self.config.seed),
            config:          self.config,
            agents:          self.agents,
            game:            self.game,
            locomotion:      self.locomotion,
            t_aset_override: self.t_aset_override,
            stats,
        })
    }
}
