//! Core pedestrian storage: `AgentStore`.

use eg_core::{AgentId, Vec2};

use crate::{AgentError, AgentResult};

/// Structure-of-Arrays storage for all pedestrian state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let p = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// The neighbour table is a single flat `Vec<AgentId>` of
/// `count × neighborhood_size` slots.  Row `i` holds agent `i`'s neighbours
/// nearest first; unused slots hold [`AgentId::INVALID`].
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Centre of mass, written by the locomotion layer.
    pub position: Vec<Vec2>,

    /// Current velocity, written by the locomotion layer.
    pub velocity: Vec<Vec2>,

    /// `false` once an agent has left the domain.  Inactive agents are
    /// skipped by neighbour search and by the game.
    pub active: Vec<bool>,

    /// `true` once an agent has passed the exit.
    pub at_goal: Vec<bool>,

    pub(crate) neighbor_radius: f64,
    pub(crate) neighborhood_size: usize,
    pub(crate) neighbors: Vec<AgentId>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn at_goal_count(&self) -> usize {
        self.at_goal.iter().filter(|&&g| g).count()
    }

    /// Record that `agent` passed the exit: it stops playing and moving.
    pub fn mark_at_goal(&mut self, agent: AgentId) {
        let i = agent.index();
        self.active[i] = false;
        self.at_goal[i] = true;
        self.velocity[i] = Vec2::ZERO;
    }

    pub fn neighbor_radius(&self) -> f64 {
        self.neighbor_radius
    }

    pub fn neighborhood_size(&self) -> usize {
        self.neighborhood_size
    }

    /// Overwrite `agent`'s neighbour row.
    ///
    /// `ids` beyond the row capacity are dropped; remaining slots are filled
    /// with the sentinel.  Used by external neighbour providers and tests.
    ///
    /// Every id must be the sentinel or another agent of this store;
    /// otherwise the row is left untouched.
    pub fn set_neighbors(&mut self, agent: AgentId, ids: &[AgentId]) -> AgentResult<()> {
        if agent.index() >= self.count {
            return Err(AgentError::UnknownAgent(agent, self.count));
        }
        if let Some(&neighbor) = ids
            .iter()
            .find(|&&id| id.is_valid() && (id == agent || id.index() >= self.count))
        {
            return Err(AgentError::InvalidNeighbor { agent, neighbor });
        }
        let k = self.neighborhood_size;
        if k == 0 {
            return Ok(());
        }
        self.ensure_neighbor_table();
        let row = &mut self.neighbors[agent.index() * k..(agent.index() + 1) * k];
        row.fill(AgentId::INVALID);
        for (slot, &id) in row.iter_mut().zip(ids) {
            *slot = id;
        }
        Ok(())
    }

    /// Resize the neighbour table to `count × neighborhood_size` if a
    /// capacity change left it stale.
    pub(crate) fn ensure_neighbor_table(&mut self) {
        let len = self.count * self.neighborhood_size;
        if self.neighbors.len() != len {
            self.neighbors.clear();
            self.neighbors.resize(len, AgentId::INVALID);
        }
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(position: Vec<Vec2>, velocity: Vec<Vec2>) -> Self {
        let count = position.len();
        Self {
            count,
            position,
            velocity,
            active: vec![true; count],
            at_goal: vec![false; count],
            neighbor_radius: 0.0,
            neighborhood_size: 0,
            neighbors: Vec::new(),
        }
    }
}
