//! Pairwise payoff of the patient/impatient egress game.
//!
//! | own \ neighbour | Impatient                  | Patient |
//! |-----------------|----------------------------|---------|
//! | Impatient       | `t_aset / avg(t_i, t_j)`   | `-1`    |
//! | Patient         | `1`                        | `0`     |
//!
//! Players pick the strategy that *minimizes* the sum over their neighbours.

use crate::Strategy;

/// Replacement for an exactly-zero average evacuation time.  Keeps the
/// impatient/impatient cell finite for the two agents nearest the door.
pub const AVERAGE_FLOOR: f64 = 4.0e-8;

/// Payoff to a player using `own` against a neighbour using `neighbor`.
///
/// `t_aset` may be negative once the safe egress budget is exhausted; it
/// flows through unchanged.
#[inline]
pub fn payoff(own: Strategy, neighbor: Strategy, t_aset: f64, t_evac_own: f64, t_evac_neighbor: f64) -> f64 {
    match (own, neighbor) {
        (Strategy::Impatient, Strategy::Impatient) => {
            let mut average = (t_evac_own + t_evac_neighbor) / 2.0;
            if average == 0.0 {
                average = AVERAGE_FLOOR;
            }
            t_aset / average
        }
        (Strategy::Impatient, Strategy::Patient) => -1.0,
        (Strategy::Patient, Strategy::Impatient) => 1.0,
        (Strategy::Patient, Strategy::Patient) => 0.0,
    }
}

/// Index of the smallest accumulated loss; ties go to the lowest index.
#[inline]
pub(crate) fn argmin(loss: &[f64]) -> usize {
    let mut best = 0;
    for (i, &l) in loss.iter().enumerate().skip(1) {
        if l < loss[best] {
            best = i;
        }
    }
    best
}
