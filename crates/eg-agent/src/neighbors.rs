//! Fixed-radius, fixed-capacity neighbour search.
//!
//! Each call bulk-loads an R-tree (via `rstar`) over the positions of active
//! agents, then fills every active agent's row with up to
//! `neighborhood_size` other active agents within `neighbor_radius`,
//! nearest first.  Inactive agents get an all-sentinel row.
//!
//! Queries only read the tree and each writes a disjoint row, so with the
//! `parallel` feature the rows are filled on Rayon's thread pool.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use eg_core::{AgentId, Vec2};

use crate::AgentStore;

type Entry = GeomWithData<[f64; 2], AgentId>;

impl AgentStore {
    /// Rebuild every neighbour row from current positions.
    ///
    /// Time complexity: O(N log N) for the bulk load plus one k-nearest
    /// query per active agent.
    pub fn update_neighbors(&mut self) {
        self.ensure_neighbor_table();
        self.neighbors.fill(AgentId::INVALID);

        let k = self.neighborhood_size;
        if k == 0 || self.count == 0 {
            return;
        }

        let entries: Vec<Entry> = self
            .position
            .iter()
            .zip(&self.active)
            .enumerate()
            .filter(|(_, (_, active))| **active)
            .map(|(i, (&p, _))| GeomWithData::new(p.into(), AgentId(i as u32)))
            .collect();
        let indexed = entries.len();
        let tree = RTree::bulk_load(entries);

        let r2 = self.neighbor_radius * self.neighbor_radius;
        // Explicit field borrows so the borrow checker sees disjoint access.
        let position = &self.position;
        let active = &self.active;
        let fill = |(i, row): (usize, &mut [AgentId])| {
            if active[i] {
                fill_row(&tree, AgentId(i as u32), position[i], r2, row);
            }
        };

        #[cfg(not(feature = "parallel"))]
        self.neighbors.chunks_mut(k).enumerate().for_each(fill);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.neighbors.par_chunks_mut(k).enumerate().for_each(fill);
        }

        tracing::trace!(indexed, capacity = k, radius = self.neighbor_radius, "neighbour rows rebuilt");
    }
}

/// Write up to `row.len()` nearest agents within `sqrt(r2)` of `pos`,
/// excluding `agent` itself.  Untouched slots keep the sentinel.
fn fill_row(tree: &RTree<Entry>, agent: AgentId, pos: Vec2, r2: f64, row: &mut [AgentId]) {
    let found = tree
        .nearest_neighbor_iter_with_distance_2(&[pos.x, pos.y])
        .take_while(|&(_, d2)| d2 <= r2)
        .filter(|(entry, _)| entry.data != agent)
        .map(|(entry, _)| entry.data);
    for (slot, id) in row.iter_mut().zip(found) {
        *slot = id;
    }
}
