//! Patient/impatient egress congestion game.
//!
//! Agents near a single exit choose to queue (`Patient`) or push
//! (`Impatient`).  The only information a player uses is its neighbours'
//! current strategies, its own and its neighbours' estimated evacuation
//! times, and the remaining available safe egress time `t_aset`.
//!
//! The evacuation time of an agent is estimated from its queue position:
//! the number of active agents closer to the exit divided by the exit's
//! throughput.

use eg_agent::PopulationView;
use eg_core::vec2::lengths;
use eg_core::{AgentId, ExitDoor, Vec2};

use crate::model::{GameContext, SpatialGame, TickInput};
use crate::payoff::{argmin, payoff};
use crate::rank::proximity_ranks;
use crate::{GameError, GameResult, Strategy, StrategySet};

// ── EgressConfig ──────────────────────────────────────────────────────────────

/// Game parameters.  Every field must be finite and strictly positive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EgressConfig {
    /// Available safe egress time at `simulation_time == 0`, seconds.
    pub t_aset_0: f64,
    /// Mean time between an agent's revision opportunities, seconds.
    pub revision_interval: f64,
    /// Players only interact with neighbours within this distance.
    pub neighbor_radius: f64,
    /// Maximum neighbours a player interacts with.
    pub neighborhood_size: usize,
}

impl EgressConfig {
    pub fn validate(&self) -> GameResult<()> {
        positive("t_aset_0", self.t_aset_0)?;
        positive("revision_interval", self.revision_interval)?;
        positive("neighbor_radius", self.neighbor_radius)?;
        if self.neighborhood_size == 0 {
            return Err(GameError::Config("neighborhood_size must be positive".into()));
        }
        Ok(())
    }
}

impl Default for EgressConfig {
    fn default() -> Self {
        Self {
            t_aset_0:          60.0,
            revision_interval: 0.001,
            neighbor_radius:   0.4,
            neighborhood_size: 8,
        }
    }
}

fn positive(name: &str, value: f64) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::Config(format!("{name} must be positive, got {value}")))
    }
}

// ── EgressGame ────────────────────────────────────────────────────────────────

/// Spatial egress game bound to one population and one exit.
///
/// Owns the per-agent strategy and evacuation-time arrays.  Both are flat
/// `Vec`s indexed by `AgentId` with the population's length, fixed at
/// construction.
pub struct EgressGame {
    exit:              ExitDoor,
    t_aset_0:          f64,
    revision_interval: f64,
    strategy:          Vec<Strategy>,
    t_evac:            Vec<f64>,
    /// `t_aset` used by the most recent tick.
    t_aset:            f64,
    aset_exhausted:    bool,
}

impl EgressGame {
    /// Validate `config`, size the population's neighbourhoods and start
    /// every agent as `Patient`.
    ///
    /// The population's neighbour rows are reset; it must rebuild them
    /// before the first [`update`][SpatialGame::update].
    pub fn new<P: PopulationView>(
        population: &mut P,
        exit:       ExitDoor,
        config:     EgressConfig,
    ) -> GameResult<Self> {
        config.validate()?;

        population.set_neighbor_radius(config.neighbor_radius);
        population.set_neighborhood_size(config.neighborhood_size);
        population.reset_neighbors();

        let n = population.size();
        tracing::debug!(
            agents = n,
            t_aset_0 = config.t_aset_0,
            interval = config.revision_interval,
            "egress game bound to population"
        );

        Ok(Self {
            exit,
            t_aset_0:          config.t_aset_0,
            revision_interval: config.revision_interval,
            strategy:          vec![Strategy::Patient; n],
            t_evac:            vec![0.0; n],
            t_aset:            config.t_aset_0,
            aset_exhausted:    false,
        })
    }

    pub fn exit(&self) -> &ExitDoor {
        &self.exit
    }

    pub fn t_aset_0(&self) -> f64 {
        self.t_aset_0
    }

    /// Available safe egress time used by the most recent tick.
    pub fn t_aset(&self) -> f64 {
        self.t_aset
    }

    /// Evacuation-time estimate per agent from the most recent tick.
    /// Inactive agents read 0.
    pub fn estimates(&self) -> &[f64] {
        &self.t_evac
    }

    /// `(impatient, patient)` head counts over all agents.
    pub fn strategy_counts(&self) -> (usize, usize) {
        let impatient = self.strategy.iter().filter(|&&s| s == Strategy::Impatient).count();
        (impatient, self.strategy.len() - impatient)
    }

    /// Replace every strategy from raw codes.
    ///
    /// All codes are checked before anything is written, so a bad code
    /// leaves the current strategies intact.
    pub fn set_strategy_codes(&mut self, codes: &[u8]) -> GameResult<()> {
        if codes.len() != self.strategy.len() {
            return Err(GameError::PopulationMismatch {
                expected: self.strategy.len(),
                got:      codes.len(),
            });
        }
        let decoded = codes
            .iter()
            .map(|&c| Strategy::try_from(c))
            .collect::<GameResult<Vec<_>>>()?;
        self.strategy = decoded;
        Ok(())
    }

    /// Queue position of each of `players` (0 = closest to the exit).
    ///
    /// Returns a permutation of `0..players.len()` aligned with `players`.
    pub fn rank_by_proximity<P: PopulationView>(&self, population: &P, players: &[AgentId]) -> Vec<usize> {
        let door = self.exit.reference_point();
        let offsets: Vec<Vec2> = players.iter().map(|&p| door - population.position(p)).collect();
        let mut distances = vec![0.0; players.len()];
        lengths(&offsets, &mut distances);
        proximity_ranks(&distances)
    }

    /// Reset every estimate to 0, then set `rank / capacity` for `players`.
    pub fn estimate_evacuation_time<P: PopulationView>(&mut self, population: &P, players: &[AgentId]) {
        let ranks = self.rank_by_proximity(population, players);
        self.t_evac.fill(0.0);
        for (&player, rank) in players.iter().zip(ranks) {
            self.t_evac[player.index()] = rank as f64 / self.exit.capacity;
        }
    }
}

impl SpatialGame for EgressGame {
    type Strategy = Strategy;

    fn strategy_set(&self) -> &[Strategy] {
        StrategySet::as_slice()
    }

    fn strategies(&self) -> &[Strategy] {
        &self.strategy
    }

    #[inline]
    fn set_strategy(&mut self, player: AgentId, strategy: Strategy) {
        self.strategy[player.index()] = strategy;
    }

    fn revision_interval(&self) -> f64 {
        self.revision_interval
    }

    fn prepare<P: PopulationView>(
        &mut self,
        population: &P,
        players:    &[AgentId],
        tick:       &TickInput,
    ) -> GameResult<GameContext> {
        self.estimate_evacuation_time(population, players);

        self.t_aset = tick
            .t_aset_override
            .unwrap_or(self.t_aset_0 - tick.simulation_time);
        if self.t_aset < 0.0 && !self.aset_exhausted {
            self.aset_exhausted = true;
            tracing::warn!(
                t_aset = self.t_aset,
                time = tick.simulation_time,
                "available safe egress time exhausted"
            );
        }

        Ok(GameContext { t_aset: self.t_aset })
    }

    /// Minimize the summed payoff against every neighbour's current
    /// strategy.  Ties (including no neighbours) resolve to `Impatient`.
    fn best_response<P: PopulationView>(
        &self,
        player:     AgentId,
        population: &P,
        ctx:        &GameContext,
    ) -> Strategy {
        let mut loss = [0.0_f64; StrategySet::MEMBERS.len()];
        let t_own = self.t_evac[player.index()];

        for &j in population.neighbors(player) {
            if !j.is_valid() {
                continue;
            }
            let s_j = self.strategy[j.index()];
            let t_j = self.t_evac[j.index()];
            for s in StrategySet::MEMBERS {
                loss[s.index()] += payoff(s, s_j, ctx.t_aset, t_own, t_j);
            }
        }

        StrategySet::MEMBERS[argmin(&loss)]
    }
}
