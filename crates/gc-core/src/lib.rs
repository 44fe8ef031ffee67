//! `gc-core`: foundational types for the grid-chase simulation.
//!
//! This crate is a dependency of every other `gc-*` crate.  It has no `gc-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coord`]       | `Coord`, `Direction`, Manhattan distance              |
//! | [`ids`]         | `AgentId`                                             |
//! | [`time`]        | `Tick`, `MoveTimer`                                   |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `GameConfig` and its YAML loader                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ChaserConfig, GameConfig, TimingConfig};
pub use coord::{Coord, Direction};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{MoveTimer, Tick};
