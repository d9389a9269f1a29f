//! `eg-sim` — tick loop driver for the egress game framework.
//!
//! # Tick loop
//!
//! ```text
//! while tick < config.max_iterations and any agent is active:
//!   ① Neighbours — rebuild every active agent's neighbour row.
//!   ② Game       — SpatialGame::update: estimates, t_aset, sequential
//!                  best-response revisions.
//!   ③ Locomotion — external integrator moves agents given their
//!                  strategies and marks those that reached the exit.
//!   ④ Stats      — iterations, elapsed time, agents at goal.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ① on Rayon's thread pool.  Step ② is always  |
//! |            | sequential.                                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eg_agent::AgentStoreBuilder;
//! use eg_core::{ExitDoor, SimConfig, Vec2};
//! use eg_game::{EgressConfig, EgressGame};
//! use eg_sim::{NoopObserver, SimBuilder, StaticCrowd};
//!
//! let mut agents = AgentStoreBuilder::new(n).positions(positions).build()?;
//! let exit = ExitDoor::new(Vec2::new(0.0, -0.6), Vec2::new(0.0, 0.6), 1.3)?;
//! let game = EgressGame::new(&mut agents, exit, EgressConfig::default())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), agents, game, StaticCrowd).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod locomotion;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use locomotion::{Locomotion, StaticCrowd};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::RunStats;
