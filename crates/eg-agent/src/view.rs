//! The `PopulationView` trait — what a spatial game may see and configure.

use eg_core::{AgentId, Vec2};

use crate::AgentStore;

/// Read access to agent state plus the neighbour-search knobs a game owns.
///
/// Games never write positions or activity flags; they only read them and
/// size the neighbourhood they play against.  The population owns the
/// neighbour policy: how rows are filled and that empty slots hold
/// [`AgentId::INVALID`].
pub trait PopulationView {
    /// Total number of agents, active or not.
    fn size(&self) -> usize;

    fn position(&self, agent: AgentId) -> Vec2;

    fn is_active(&self, agent: AgentId) -> bool;

    /// Fixed-capacity neighbour row for `agent`.  Empty slots hold
    /// [`AgentId::INVALID`].
    fn neighbors(&self, agent: AgentId) -> &[AgentId];

    /// Indices of active agents in ascending order.
    fn indices(&self) -> Vec<AgentId> {
        (0..self.size() as u32)
            .map(AgentId)
            .filter(|&a| self.is_active(a))
            .collect()
    }

    fn set_neighbor_radius(&mut self, radius: f64);

    fn set_neighborhood_size(&mut self, size: usize);

    /// Discard all neighbour rows.  The population must rebuild them before
    /// they are read again.
    fn reset_neighbors(&mut self);
}

impl PopulationView for AgentStore {
    #[inline]
    fn size(&self) -> usize {
        self.count
    }

    #[inline]
    fn position(&self, agent: AgentId) -> Vec2 {
        self.position[agent.index()]
    }

    #[inline]
    fn is_active(&self, agent: AgentId) -> bool {
        self.active[agent.index()]
    }

    #[inline]
    fn neighbors(&self, agent: AgentId) -> &[AgentId] {
        let k = self.neighborhood_size;
        let start = agent.index() * k;
        self.neighbors.get(start..start + k).unwrap_or(&[])
    }

    fn set_neighbor_radius(&mut self, radius: f64) {
        self.neighbor_radius = radius;
    }

    fn set_neighborhood_size(&mut self, size: usize) {
        self.neighborhood_size = size;
    }

    fn reset_neighbors(&mut self) {
        self.neighbors.clear();
        self.neighbors.resize(self.count * self.neighborhood_size, AgentId::INVALID);
    }
}
