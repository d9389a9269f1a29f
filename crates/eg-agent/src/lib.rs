//! `eg-agent` — Structure-of-Arrays pedestrian storage for the egress game.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`store`]     | `AgentStore` (SoA arrays + flat neighbour table)           |
//! | [`view`]      | `PopulationView` — the read/configure surface games consume |
//! | [`neighbors`] | R-tree neighbour search (`AgentStore::update_neighbors`)   |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                  |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Neighbour queries run on Rayon's thread pool.              |
//! | `serde`    | Derives `Serialize`/`Deserialize` on eg-core types.        |

pub mod builder;
pub mod error;
pub mod neighbors;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
pub use view::PopulationView;
