//! Unit tests for eg-game.

use eg_agent::{AgentStore, AgentStoreBuilder, PopulationView};
use eg_core::{AgentId, ExitDoor, PlayerOrder, StochasticClock, Vec2};

use crate::{EgressConfig, EgressGame};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Deterministic stand-in for the RNG: fixed revision order, clock that
/// either always or never fires.
struct Scripted {
    order: Vec<AgentId>,
    fire:  bool,
}

impl Scripted {
    fn always(order: &[u32]) -> Self {
        Self { order: order.iter().copied().map(AgentId).collect(), fire: true }
    }

    fn never() -> Self {
        Self { order: Vec::new(), fire: false }
    }
}

impl PlayerOrder for Scripted {
    /// Players listed in `order` go first, in that order; the rest keep
    /// their relative order.
    fn shuffle_players(&mut self, players: &mut [AgentId]) {
        players.sort_by_key(|p| self.order.iter().position(|o| o == p).unwrap_or(usize::MAX));
    }
}

impl StochasticClock for Scripted {
    fn fires(&mut self, _interval: f64, _dt: f64) -> bool {
        self.fire
    }
}

/// Exit centred on the origin, one agent per second.
fn door() -> ExitDoor {
    ExitDoor::new(Vec2::new(0.0, -0.5), Vec2::new(0.0, 0.5), 1.0).unwrap()
}

/// Agents on the positive x-axis at the given distances from the door.
fn crowd(xs: &[f64]) -> AgentStore {
    AgentStoreBuilder::new(xs.len())
        .positions(xs.iter().map(|&x| Vec2::new(x, 0.0)).collect())
        .build()
        .unwrap()
}

fn config(t_aset_0: f64, neighbor_radius: f64, neighborhood_size: usize) -> EgressConfig {
    EgressConfig { t_aset_0, revision_interval: 0.1, neighbor_radius, neighborhood_size }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategy {
    use crate::{GameError, Strategy, StrategySet};

    #[test]
    fn codes_roundtrip() {
        for s in StrategySet::MEMBERS {
            assert_eq!(Strategy::try_from(s.code()).unwrap(), s);
        }
        assert_eq!(Strategy::Impatient.index(), 0);
        assert_eq!(Strategy::Patient.index(), 1);
    }

    #[test]
    fn unknown_code_is_invalid() {
        assert!(matches!(Strategy::try_from(2), Err(GameError::InvalidStrategy(2))));
        assert!(matches!(Strategy::try_from(255), Err(GameError::InvalidStrategy(255))));
    }

    #[test]
    fn default_is_patient() {
        assert_eq!(Strategy::default(), Strategy::Patient);
    }

    #[test]
    fn set_order_puts_impatient_first() {
        assert_eq!(StrategySet::as_slice(), &[Strategy::Impatient, Strategy::Patient]);
        assert!(StrategySet::contains(Strategy::Patient));
    }
}

// ── Payoff ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod payoff {
    use crate::Strategy::{Impatient, Patient};
    use crate::payoff::{AVERAGE_FLOOR, argmin};
    use crate::payoff;

    #[test]
    fn table_values() {
        assert_eq!(payoff(Impatient, Impatient, 10.0, 2.0, 2.0), 5.0);
        assert_eq!(payoff(Impatient, Patient, 10.0, 2.0, 2.0), -1.0);
        assert_eq!(payoff(Patient, Impatient, 10.0, 2.0, 2.0), 1.0);
        assert_eq!(payoff(Patient, Patient, 10.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn impatient_pair_uses_average_time() {
        assert_eq!(payoff(Impatient, Impatient, 9.0, 1.0, 5.0), 3.0);
    }

    #[test]
    fn zero_average_is_floored() {
        let p = payoff(Impatient, Impatient, 1.0, 0.0, 0.0);
        assert!(p.is_finite());
        assert_eq!(p, 1.0 / 4e-8);
        assert_eq!(AVERAGE_FLOOR, 4e-8);
    }

    #[test]
    fn negative_t_aset_flows_through() {
        assert_eq!(payoff(Impatient, Impatient, -4.0, 1.0, 1.0), -4.0);
    }

    #[test]
    fn argmin_prefers_first_on_tie() {
        assert_eq!(argmin(&[0.0, 0.0]), 0);
        assert_eq!(argmin(&[1.0, 0.5]), 1);
        assert_eq!(argmin(&[-1.0, 0.0]), 0);
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rank {
    use crate::rank::proximity_ranks;

    #[test]
    fn ranks_follow_distance() {
        assert_eq!(proximity_ranks(&[3.0, 1.0, 2.0]), vec![2, 0, 1]);
    }

    #[test]
    fn ranks_are_a_permutation() {
        let d = [5.5, 0.1, 9.0, 3.3, 3.2, 7.0, 0.0];
        let mut r = proximity_ranks(&d);
        r.sort();
        assert_eq!(r, (0..d.len()).collect::<Vec<_>>());
    }

    #[test]
    fn ties_keep_input_order() {
        assert_eq!(proximity_ranks(&[1.0, 1.0, 0.5, 1.0]), vec![1, 2, 0, 3]);
    }

    #[test]
    fn empty() {
        assert!(proximity_ranks(&[]).is_empty());
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;
    use crate::{GameError, SpatialGame, Strategy};

    #[test]
    fn configures_population_and_starts_patient() {
        let mut store = crowd(&[1.0, 2.0, 3.0]);
        let game = EgressGame::new(&mut store, door(), config(100.0, 0.7, 5)).unwrap();

        assert_eq!(store.neighbor_radius(), 0.7);
        assert_eq!(store.neighborhood_size(), 5);
        assert_eq!(store.neighbors(AgentId(0)), &[AgentId::INVALID; 5]);

        assert_eq!(game.strategies(), &[Strategy::Patient; 3]);
        assert_eq!(game.estimates(), &[0.0; 3]);
        assert_eq!(game.strategy_counts(), (0, 3));
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad = [
            EgressConfig { t_aset_0: 0.0, ..EgressConfig::default() },
            EgressConfig { t_aset_0: -1.0, ..EgressConfig::default() },
            EgressConfig { revision_interval: 0.0, ..EgressConfig::default() },
            EgressConfig { revision_interval: f64::NAN, ..EgressConfig::default() },
            EgressConfig { neighbor_radius: -0.4, ..EgressConfig::default() },
            EgressConfig { neighborhood_size: 0, ..EgressConfig::default() },
        ];
        for cfg in bad {
            let mut store = crowd(&[1.0]);
            let result = EgressGame::new(&mut store, door(), cfg.clone());
            assert!(matches!(result, Err(GameError::Config(_))), "{cfg:?} accepted");
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EgressConfig::default().validate().is_ok());
    }

    #[test]
    fn strategy_codes_are_validated_atomically() {
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 1.0, 2)).unwrap();

        game.set_strategy_codes(&[0, 1]).unwrap();
        assert_eq!(game.strategies(), &[Strategy::Impatient, Strategy::Patient]);

        let err = game.set_strategy_codes(&[1, 7]).unwrap_err();
        assert!(matches!(err, GameError::InvalidStrategy(7)));
        assert_eq!(game.strategies(), &[Strategy::Impatient, Strategy::Patient]);

        assert!(matches!(
            game.set_strategy_codes(&[1]),
            Err(GameError::PopulationMismatch { expected: 2, got: 1 })
        ));
    }
}

// ── Estimation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimation {
    use super::*;

    #[test]
    fn estimate_is_rank_over_capacity() {
        let mut store = crowd(&[4.0, 1.0, 3.0, 2.0]);
        let exit = ExitDoor::new(Vec2::new(0.0, -0.5), Vec2::new(0.0, 0.5), 2.0).unwrap();
        let mut game = EgressGame::new(&mut store, exit, config(10.0, 1.0, 2)).unwrap();

        let players = store.indices();
        assert_eq!(game.rank_by_proximity(&store, &players), vec![3, 0, 2, 1]);

        game.estimate_evacuation_time(&store, &players);
        assert_eq!(game.estimates(), &[1.5, 0.0, 1.0, 0.5]);
    }

    #[test]
    fn estimates_non_decreasing_with_distance() {
        let xs = [7.0, 0.3, 2.2, 9.9, 4.4, 1.1];
        let mut store = crowd(&xs);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 1.0, 2)).unwrap();
        let players = store.indices();
        game.estimate_evacuation_time(&store, &players);

        let mut by_distance: Vec<usize> = (0..xs.len()).collect();
        by_distance.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
        for pair in by_distance.windows(2) {
            assert!(game.estimates()[pair[0]] <= game.estimates()[pair[1]]);
        }
    }

    #[test]
    fn inactive_agents_read_zero() {
        let mut store = crowd(&[1.0, 2.0, 3.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 1.0, 2)).unwrap();

        let players = store.indices();
        game.estimate_evacuation_time(&store, &players);
        assert_eq!(game.estimates(), &[0.0, 1.0, 2.0]);

        store.mark_at_goal(AgentId(0));
        let players = store.indices();
        game.estimate_evacuation_time(&store, &players);
        assert_eq!(game.estimates(), &[0.0, 0.0, 1.0]);
    }
}

// ── Tick update ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod update {
    use super::*;
    use crate::{GameError, SpatialGame, StrategySet, TickInput};
    use crate::Strategy::{Impatient, Patient};

    #[test]
    fn three_agents_end_to_end() {
        // Agent index order is the reverse of proximity order.
        let mut store = crowd(&[3.0, 2.0, 1.0]);
        let mut game = EgressGame::new(&mut store, door(), config(100.0, 1.5, 2)).unwrap();
        store.update_neighbors();

        let summary = game
            .update(&store, TickInput::new(0.0, 1.0), &mut Scripted::always(&[0, 1, 2]))
            .unwrap();

        assert_eq!(summary.players, 3);
        assert_eq!(summary.revised, 3);
        assert_eq!(game.strategies().len(), 3);
        assert!(game.strategies().iter().all(|&s| StrategySet::contains(s)));
        assert_eq!(game.estimates(), &[2.0, 1.0, 0.0]);
        assert_eq!(game.t_aset(), 100.0);
    }

    #[test]
    fn later_players_see_earlier_revisions() {
        // Agent 0 is first in the queue (estimate 0), agent 1 second (1).
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        store.update_neighbors();

        // Agent 0 faces a patient neighbour and turns impatient.  Agent 1
        // then faces that impatient neighbour: 10 / avg(1, 0) = 20 against 1,
        // so it stays patient.  Had it seen the old strategy it would have
        // turned impatient too.
        game.update(&store, TickInput::new(0.0, 1.0), &mut Scripted::always(&[0, 1]))
            .unwrap();
        assert_eq!(game.strategies(), &[Impatient, Patient]);
    }

    #[test]
    fn revision_order_changes_outcome() {
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        store.update_neighbors();

        game.update(&store, TickInput::new(0.0, 1.0), &mut Scripted::always(&[1, 0]))
            .unwrap();
        assert_eq!(game.strategies(), &[Patient, Impatient]);
    }

    #[test]
    fn no_clock_no_revision() {
        let mut store = crowd(&[1.0, 2.0, 3.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 2)).unwrap();
        store.update_neighbors();

        let summary = game.update(&store, TickInput::new(0.0, 1.0), &mut Scripted::never()).unwrap();
        assert_eq!(summary.revised, 0);
        assert_eq!(game.strategies(), &[Patient; 3]);
        // Estimates are still refreshed.
        assert_eq!(game.estimates(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn isolated_player_turns_impatient() {
        // Nobody within radius: both accumulators stay 0 and the tie goes
        // to the first member of the set.
        let mut store = crowd(&[1.0, 50.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 1.0, 2)).unwrap();
        store.update_neighbors();

        let summary = game
            .update(&store, TickInput::new(0.0, 0.1), &mut Scripted::always(&[0, 1]))
            .unwrap();
        assert_eq!(game.strategies(), &[Impatient, Impatient]);
        assert_eq!(summary.switched, 2);
    }

    #[test]
    fn inactive_agents_keep_their_strategy() {
        let mut store = crowd(&[1.0, 50.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 1.0, 2)).unwrap();
        store.mark_at_goal(AgentId(1));
        store.update_neighbors();

        let summary = game
            .update(&store, TickInput::new(0.0, 0.1), &mut Scripted::always(&[0, 1]))
            .unwrap();
        assert_eq!(summary.players, 1);
        assert_eq!(game.strategies(), &[Impatient, Patient]);
    }

    #[test]
    fn t_aset_counts_down_and_can_be_overridden() {
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        store.update_neighbors();

        game.update(&store, TickInput::new(4.0, 0.1), &mut Scripted::never()).unwrap();
        assert_eq!(game.t_aset(), 6.0);

        game.update(&store, TickInput::new(12.5, 0.1), &mut Scripted::never()).unwrap();
        assert_eq!(game.t_aset(), -2.5);

        game.update(&store, TickInput::new(4.0, 0.1).with_t_aset(33.0), &mut Scripted::never())
            .unwrap();
        assert_eq!(game.t_aset(), 33.0);
    }

    #[test]
    fn negative_t_aset_favours_pushing_pairs() {
        // With t_aset < 0 the impatient/impatient cell is negative, so the
        // second player minimizes by also turning impatient.
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        store.update_neighbors();

        game.update(
            &store,
            TickInput::new(0.0, 1.0).with_t_aset(-10.0),
            &mut Scripted::always(&[0, 1]),
        )
        .unwrap();
        assert_eq!(game.strategies(), &[Impatient, Impatient]);
    }

    #[test]
    fn population_mismatch_aborts_tick() {
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        let other = crowd(&[1.0, 2.0, 3.0]);

        let err = game
            .update(&other, TickInput::new(0.0, 1.0), &mut Scripted::always(&[0]))
            .unwrap_err();
        assert!(matches!(err, GameError::PopulationMismatch { expected: 2, got: 3 }));
        assert_eq!(game.strategies(), &[Patient; 2]);
    }

    #[test]
    fn bad_time_step_aborts_tick() {
        let mut store = crowd(&[1.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        for dt in [-0.1, f64::NAN, f64::INFINITY] {
            let err = game
                .update(&store, TickInput::new(0.0, dt), &mut Scripted::always(&[0]))
                .unwrap_err();
            assert!(matches!(err, GameError::InvalidTimeStep(_)));
        }
    }

    #[test]
    fn non_finite_time_aborts_tick() {
        let mut store = crowd(&[1.0, 2.0]);
        let mut game = EgressGame::new(&mut store, door(), config(10.0, 5.0, 1)).unwrap();
        store.update_neighbors();
        game.set_strategy_codes(&[Impatient.code(), Patient.code()]).unwrap();

        for t in [f64::NAN, f64::INFINITY] {
            let err = game
                .update(&store, TickInput::new(t, 1.0), &mut Scripted::always(&[0, 1]))
                .unwrap_err();
            assert!(matches!(err, GameError::NonFiniteTime { what: "simulation time", .. }));

            let err = game
                .update(&store, TickInput::new(0.0, 1.0).with_t_aset(t), &mut Scripted::always(&[0, 1]))
                .unwrap_err();
            assert!(matches!(err, GameError::NonFiniteTime { what: "t_aset override", .. }));
        }
        assert_eq!(game.strategies(), &[Impatient, Patient]);
        assert_eq!(game.t_aset(), 10.0);
    }

    #[test]
    fn invariants_hold_over_random_ticks() {
        use eg_core::SimRng;

        let xs: Vec<f64> = (0..40).map(|i| 0.5 + 0.25 * i as f64).collect();
        let mut store = crowd(&xs);
        let mut game = EgressGame::new(&mut store, door(), config(5.0, 0.6, 4)).unwrap();
        let mut rng = SimRng::new(9);

        for step in 0..200 {
            if step % 50 == 49 {
                store.mark_at_goal(AgentId(step / 50));
            }
            store.update_neighbors();
            let t = step as f64 * 0.05;
            game.update(&store, TickInput::new(t, 0.05), &mut rng).unwrap();

            assert_eq!(game.strategies().len(), store.size());
            assert!(game.strategies().iter().all(|&s| StrategySet::contains(s)));
            let mut ranks: Vec<f64> = store.indices().iter().map(|p| game.estimates()[p.index()]).collect();
            ranks.sort_by(f64::total_cmp);
            let expected: Vec<f64> = (0..ranks.len()).map(|r| r as f64).collect();
            assert_eq!(ranks, expected);
        }
    }
}
