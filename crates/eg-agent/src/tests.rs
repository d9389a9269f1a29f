//! Unit tests for eg-agent.

#[cfg(test)]
mod builder {
    use eg_core::Vec2;

    use crate::{AgentError, AgentStoreBuilder};

    #[test]
    fn defaults_place_everyone_at_rest_and_active() {
        let store = AgentStoreBuilder::new(4).build().unwrap();
        assert_eq!(store.count, 4);
        assert_eq!(store.position, vec![Vec2::ZERO; 4]);
        assert_eq!(store.velocity, vec![Vec2::ZERO; 4]);
        assert_eq!(store.active_count(), 4);
        assert_eq!(store.at_goal_count(), 0);
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = AgentStoreBuilder::new(3).positions(vec![Vec2::ZERO; 2]).build();
        assert!(matches!(
            result,
            Err(AgentError::CountMismatch { expected: 3, got: 2, what: "positions" })
        ));
    }

    #[test]
    fn velocity_count_mismatch_errors() {
        let result = AgentStoreBuilder::new(1).velocities(vec![]).build();
        assert!(result.is_err());
    }

    #[test]
    fn empty_store() {
        let store = AgentStoreBuilder::new(0).build().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }
}

#[cfg(test)]
mod view {
    use eg_core::{AgentId, Vec2};

    use crate::{AgentError, AgentStoreBuilder, PopulationView};

    #[test]
    fn indices_skip_inactive_agents() {
        let mut store = AgentStoreBuilder::new(4).build().unwrap();
        store.mark_at_goal(AgentId(1));
        assert_eq!(store.indices(), vec![AgentId(0), AgentId(2), AgentId(3)]);
        assert!(!store.is_active(AgentId(1)));
        assert!(store.at_goal[1]);
        assert_eq!(store.at_goal_count(), 1);
    }

    #[test]
    fn reset_sizes_table_with_sentinels() {
        let mut store = AgentStoreBuilder::new(3).build().unwrap();
        assert!(store.neighbors(AgentId(0)).is_empty());

        store.set_neighborhood_size(4);
        store.reset_neighbors();
        for id in store.agent_ids() {
            assert_eq!(store.neighbors(id), &[AgentId::INVALID; 4]);
        }
    }

    #[test]
    fn set_neighbors_truncates_and_pads() {
        let mut store = AgentStoreBuilder::new(5).build().unwrap();
        store.set_neighborhood_size(2);
        store.reset_neighbors();

        store.set_neighbors(AgentId(0), &[AgentId(1)]).unwrap();
        assert_eq!(store.neighbors(AgentId(0)), &[AgentId(1), AgentId::INVALID]);

        store.set_neighbors(AgentId(0), &[AgentId(4), AgentId(3), AgentId(2)]).unwrap();
        assert_eq!(store.neighbors(AgentId(0)), &[AgentId(4), AgentId(3)]);
        // Other rows untouched.
        assert_eq!(store.neighbors(AgentId(1)), &[AgentId::INVALID; 2]);
    }

    #[test]
    fn set_neighbors_rejects_foreign_ids() {
        let mut store = AgentStoreBuilder::new(2).build().unwrap();
        store.set_neighborhood_size(2);
        store.reset_neighbors();
        store.set_neighbors(AgentId(0), &[AgentId(1)]).unwrap();

        let err = store.set_neighbors(AgentId(0), &[AgentId::INVALID, AgentId(7)]).unwrap_err();
        assert!(matches!(
            err,
            AgentError::InvalidNeighbor { agent: AgentId(0), neighbor: AgentId(7) }
        ));
        let err = store.set_neighbors(AgentId(1), &[AgentId(1)]).unwrap_err();
        assert!(matches!(err, AgentError::InvalidNeighbor { neighbor: AgentId(1), .. }));
        assert!(matches!(
            store.set_neighbors(AgentId(2), &[]),
            Err(AgentError::UnknownAgent(AgentId(2), 2))
        ));
        // Failed writes leave the rows as they were.
        assert_eq!(store.neighbors(AgentId(0)), &[AgentId(1), AgentId::INVALID]);
        assert_eq!(store.neighbors(AgentId(1)), &[AgentId::INVALID; 2]);
    }

    #[test]
    fn position_reads_store() {
        let store = AgentStoreBuilder::new(2)
            .positions(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)])
            .build()
            .unwrap();
        assert_eq!(store.position(AgentId(1)), Vec2::new(3.0, 4.0));
        assert_eq!(store.size(), 2);
    }
}

#[cfg(test)]
mod neighbors {
    use eg_core::{AgentId, Vec2};

    use crate::{AgentStore, AgentStoreBuilder, PopulationView};

    /// Five agents on the x-axis at 0, 1, 2, 3, 10.
    fn line() -> AgentStore {
        let xs = [0.0, 1.0, 2.0, 3.0, 10.0];
        AgentStoreBuilder::new(xs.len())
            .positions(xs.iter().map(|&x| Vec2::new(x, 0.0)).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn nearest_first_within_radius() {
        let mut store = line();
        store.set_neighbor_radius(1.5);
        store.set_neighborhood_size(3);
        store.update_neighbors();

        assert_eq!(store.neighbors(AgentId(0)), &[AgentId(1), AgentId::INVALID, AgentId::INVALID]);
        let mut mid: Vec<AgentId> = store.neighbors(AgentId(2))[..2].to_vec();
        mid.sort();
        assert_eq!(mid, vec![AgentId(1), AgentId(3)]);
        assert_eq!(store.neighbors(AgentId(2))[2], AgentId::INVALID);
        // The far agent sees nobody.
        assert_eq!(store.neighbors(AgentId(4)), &[AgentId::INVALID; 3]);
    }

    #[test]
    fn capacity_limits_row() {
        let mut store = line();
        store.set_neighbor_radius(100.0);
        store.set_neighborhood_size(2);
        store.update_neighbors();
        // Agent 0's two nearest are 1 then 2.
        assert_eq!(store.neighbors(AgentId(0)), &[AgentId(1), AgentId(2)]);
        // Agent 4's two nearest are 3 then 2.
        assert_eq!(store.neighbors(AgentId(4)), &[AgentId(3), AgentId(2)]);
    }

    #[test]
    fn never_lists_self() {
        let mut store = line();
        store.set_neighbor_radius(100.0);
        store.set_neighborhood_size(5);
        store.update_neighbors();
        for id in store.agent_ids() {
            assert!(!store.neighbors(id).contains(&id));
            // Four others exist; fifth slot stays empty.
            assert_eq!(store.neighbors(id)[4], AgentId::INVALID);
        }
    }

    #[test]
    fn inactive_agents_are_excluded() {
        let mut store = line();
        store.set_neighbor_radius(1.5);
        store.set_neighborhood_size(2);
        store.mark_at_goal(AgentId(1));
        store.update_neighbors();

        assert_eq!(store.neighbors(AgentId(0)), &[AgentId::INVALID; 2]);
        assert_eq!(store.neighbors(AgentId(1)), &[AgentId::INVALID; 2]);
        assert_eq!(store.neighbors(AgentId(2)), &[AgentId(3), AgentId::INVALID]);
    }

    #[test]
    fn rebuild_clears_stale_rows() {
        let mut store = line();
        store.set_neighbor_radius(1.5);
        store.set_neighborhood_size(2);
        store.update_neighbors();
        assert_eq!(store.neighbors(AgentId(3))[0], AgentId(2));

        store.position[3] = Vec2::new(50.0, 0.0);
        store.update_neighbors();
        assert_eq!(store.neighbors(AgentId(3)), &[AgentId::INVALID; 2]);
    }

    #[test]
    fn zero_capacity_is_empty() {
        let mut store = line();
        store.set_neighbor_radius(1.5);
        store.update_neighbors();
        assert!(store.neighbors(AgentId(0)).is_empty());
    }
}
