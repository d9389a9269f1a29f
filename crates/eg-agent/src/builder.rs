//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use eg_agent::AgentStoreBuilder;
//! use eg_core::Vec2;
//!
//! let store = AgentStoreBuilder::new(3)
//!     .positions(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 3);
//! assert_eq!(store.active_count(), 3);
//! ```

use eg_core::Vec2;

use crate::{AgentError, AgentResult, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Agents without explicit positions start at the origin, all at rest and
/// active.  The neighbour table stays empty until a game sizes it.
pub struct AgentStoreBuilder {
    count:      usize,
    positions:  Option<Vec<Vec2>>,
    velocities: Option<Vec<Vec2>>,
}

impl AgentStoreBuilder {
    pub fn new(count: usize) -> Self {
        Self { count, positions: None, velocities: None }
    }

    /// Initial positions (must be length `count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Initial velocities (must be length `count`).
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    pub fn build(self) -> AgentResult<AgentStore> {
        let position = resolve(self.positions, self.count, "positions")?;
        let velocity = resolve(self.velocities, self.count, "velocities")?;
        Ok(AgentStore::new(position, velocity))
    }
}

fn resolve(v: Option<Vec<Vec2>>, count: usize, what: &'static str) -> AgentResult<Vec<Vec2>> {
    match v {
        Some(v) if v.len() != count => Err(AgentError::CountMismatch {
            expected: count,
            got: v.len(),
            what,
        }),
        Some(v) => Ok(v),
        None => Ok(vec![Vec2::ZERO; count]),
    }
}
