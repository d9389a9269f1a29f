//! Deterministic simulation RNG and the two random seams the game consumes.
//!
//! The game never names a concrete generator.  It asks two questions of
//! whatever it is handed:
//!
//! - [`PlayerOrder`] — in which order do players revise this tick?
//! - [`StochasticClock`] — does this player get a revision opportunity now?
//!
//! [`SimRng`] answers both from one seeded `SmallRng`, so a run is fully
//! reproducible from `SimConfig::seed`.  Tests substitute fakes (fixed order,
//! clock that always fires) to pin the otherwise random schedule.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

// ── Seams ─────────────────────────────────────────────────────────────────────

/// Single-shot test approximating a Poisson arrival.
pub trait StochasticClock {
    /// `true` if at least one event of a Poisson process with mean
    /// inter-arrival time `interval` falls in `[0, dt)`.
    fn fires(&mut self, interval: f64, dt: f64) -> bool;
}

/// Source of the per-tick revision order.
pub trait PlayerOrder {
    /// Permute `players` in place.
    fn shuffle_players(&mut self, players: &mut [AgentId]);
}

/// Probability that a Poisson process with mean gap `interval` produces an
/// arrival within `dt`: `1 - exp(-dt / interval)`.
#[inline]
pub fn arrival_probability(interval: f64, dt: f64) -> f64 {
    if dt <= 0.0 {
        return 0.0;
    }
    -(-dt / interval).exp_m1()
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for the single-threaded tick loop.
///
/// One instance drives both the revision order and the revision clock, so
/// the draw sequence (and therefore the run) depends only on the seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}

impl StochasticClock for SimRng {
    #[inline]
    fn fires(&mut self, interval: f64, dt: f64) -> bool {
        self.gen_bool(arrival_probability(interval, dt))
    }
}

impl PlayerOrder for SimRng {
    #[inline]
    fn shuffle_players(&mut self, players: &mut [AgentId]) {
        self.shuffle(players);
    }
}
