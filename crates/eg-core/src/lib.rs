//! `eg-core` — foundational types for the egress game framework.
//!
//! This crate is a dependency of every other `eg-*` crate.  It has no `eg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`vec2`]   | `Vec2` and the 2-D vector kernels                            |
//! | [`ids`]    | `AgentId`                                                   |
//! | [`geo`]    | `ExitDoor`                                                  |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                             |
//! | [`rng`]    | `SimRng`, `StochasticClock`, `PlayerOrder`                  |
//! | [`error`]  | `EgError`, `EgResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EgError, EgResult};
pub use geo::ExitDoor;
pub use ids::AgentId;
pub use rng::{PlayerOrder, SimRng, StochasticClock};
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::Vec2;
