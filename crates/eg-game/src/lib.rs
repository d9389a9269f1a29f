//! `eg-game` — spatial strategy games played by a pedestrian population.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`strategy`] | `Strategy` (`Impatient`, `Patient`), `StrategySet`            |
//! | [`payoff`]   | The egress payoff table and its zero-average floor            |
//! | [`rank`]     | Exit-proximity ranking (double sort)                          |
//! | [`model`]    | `SpatialGame` trait, `TickInput`, `GameContext`               |
//! | [`egress`]   | `EgressGame`, `EgressConfig`                                  |
//! | [`error`]    | `GameError`, `GameResult<T>`                                  |
//!
//! # Design notes
//!
//! A tick of any [`SpatialGame`] runs in two steps:
//!
//! 1. **Prepare**: the variant derives whatever per-tick context its payoff
//!    needs (for [`EgressGame`]: evacuation-time estimates and the remaining
//!    safe egress time).
//! 2. **Revise**: players are visited one at a time in shuffled order; each
//!    one whose revision clock fires adopts its best response.  The write
//!    happens immediately, so later players in the same tick play against
//!    the revised strategy.
//!
//! Step 2 is the provided [`SpatialGame::update`] and is shared by every
//! variant.  It is sequential on purpose and must stay that way.

pub mod egress;
pub mod error;
pub mod model;
pub mod payoff;
pub mod rank;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use egress::{EgressConfig, EgressGame};
pub use error::{GameError, GameResult};
pub use model::{GameContext, RevisionSummary, SpatialGame, TickInput};
pub use payoff::payoff;
pub use strategy::{Strategy, StrategySet};
