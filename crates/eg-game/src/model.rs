//! The `SpatialGame` trait — the extension point for game variants.

use std::fmt;

use eg_agent::PopulationView;
use eg_core::{AgentId, PlayerOrder, StochasticClock};

use crate::{GameError, GameResult};

/// Per-tick input from the driver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInput {
    /// Simulated seconds since the run started.
    pub simulation_time: f64,
    /// Length of the step being taken, in seconds.
    pub dt: f64,
    /// Replaces `t_aset_0 - simulation_time` for this tick when set.
    pub t_aset_override: Option<f64>,
}

impl TickInput {
    pub fn new(simulation_time: f64, dt: f64) -> Self {
        Self { simulation_time, dt, t_aset_override: None }
    }

    pub fn with_t_aset(mut self, t_aset: f64) -> Self {
        self.t_aset_override = Some(t_aset);
        self
    }
}

/// Read-only context shared by every best-response call in one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameContext {
    /// Remaining available safe egress time.  May be negative.
    pub t_aset: f64,
}

/// What one `update` did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RevisionSummary {
    /// Active agents that took part this tick.
    pub players: usize,
    /// Players whose revision clock fired (whether or not they switched).
    pub revised: usize,
    /// Players that ended up with a different strategy.
    pub switched: usize,
}

/// A game played on the neighbour graph of a population.
///
/// Implementors provide the payoff side: the strategy domain, per-tick
/// context and best response.  The tick schedule lives in the provided
/// [`update`][Self::update] and is the same for every variant.
///
/// # Example
///
/// ```rust,ignore
/// struct Conformist { strategy: Vec<Colour> }
///
/// impl SpatialGame for Conformist {
///     type Strategy = Colour;
///     fn strategy_set(&self) -> &[Colour] { &[Colour::Red, Colour::Blue] }
///     fn strategies(&self) -> &[Colour] { &self.strategy }
///     fn set_strategy(&mut self, p: AgentId, s: Colour) { self.strategy[p.index()] = s }
///     fn revision_interval(&self) -> f64 { 1.0 }
///     fn prepare<P: PopulationView>(&mut self, _: &P, _: &[AgentId], _: &TickInput)
///         -> GameResult<GameContext> { Ok(GameContext { t_aset: 0.0 }) }
///     fn best_response<P: PopulationView>(&self, p: AgentId, pop: &P, _: &GameContext)
///         -> Colour { majority_colour(pop.neighbors(p), &self.strategy) }
/// }
/// ```
pub trait SpatialGame {
    type Strategy: Copy + PartialEq + fmt::Debug;

    /// Ordered choice domain.  Earlier members win best-response ties.
    fn strategy_set(&self) -> &[Self::Strategy];

    /// Current strategy of every agent, indexed by `AgentId`.
    fn strategies(&self) -> &[Self::Strategy];

    fn set_strategy(&mut self, player: AgentId, strategy: Self::Strategy);

    /// Mean time between an agent's revision opportunities.
    fn revision_interval(&self) -> f64;

    /// Recompute per-tick state for `players` before anyone revises.
    fn prepare<P: PopulationView>(
        &mut self,
        population: &P,
        players:    &[AgentId],
        tick:       &TickInput,
    ) -> GameResult<GameContext>;

    /// The strategy `player` would adopt against its neighbours' current
    /// strategies.
    fn best_response<P: PopulationView>(
        &self,
        player:     AgentId,
        population: &P,
        ctx:        &GameContext,
    ) -> Self::Strategy;

    /// Advance the game by one tick.
    ///
    /// Players are revised one after another in the order `rng` shuffles
    /// them into, each write landing before the next player is evaluated.
    /// A failed precondition aborts the tick before any strategy changes.
    fn update<P, R>(
        &mut self,
        population: &P,
        tick:       TickInput,
        rng:        &mut R,
    ) -> GameResult<RevisionSummary>
    where
        P: PopulationView,
        R: StochasticClock + PlayerOrder,
    {
        let expected = self.strategies().len();
        if population.size() != expected {
            return Err(GameError::PopulationMismatch { expected, got: population.size() });
        }
        if !(tick.dt.is_finite() && tick.dt >= 0.0) {
            return Err(GameError::InvalidTimeStep(tick.dt));
        }
        if !tick.simulation_time.is_finite() {
            return Err(GameError::NonFiniteTime { what: "simulation time", value: tick.simulation_time });
        }
        if let Some(t_aset) = tick.t_aset_override.filter(|t| !t.is_finite()) {
            return Err(GameError::NonFiniteTime { what: "t_aset override", value: t_aset });
        }

        let mut players = population.indices();
        let ctx = self.prepare(population, &players, &tick)?;
        rng.shuffle_players(&mut players);

        let interval = self.revision_interval();
        let mut summary = RevisionSummary { players: players.len(), ..Default::default() };
        for &player in &players {
            if !rng.fires(interval, tick.dt) {
                continue;
            }
            let next = self.best_response(player, population, &ctx);
            if next != self.strategies()[player.index()] {
                summary.switched += 1;
            }
            self.set_strategy(player, next);
            summary.revised += 1;
        }
        Ok(summary)
    }
}
