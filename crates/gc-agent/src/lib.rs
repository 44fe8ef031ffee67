//! `gc-agent`: the two agent kinds and their decision policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`eater`]   | `Eater`: danger-avoiding route to the nearest goal            |
//! | [`chaser`]  | `Chaser`, `wander_step`                                       |
//! | [`mind`]    | `ChaserMode` (`Wander`/`Pursue`), `ChaserMind` timer machine  |
//! | [`roster`]  | `Roster`, `RosterBuilder` (spawning), `AgentStatus` rows      |
//! | [`name`]    | `random_name`                                                 |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Moving
//!
//! Agents only *propose* steps.  Every proposal passes through
//! [`checked_move`] before it becomes the agent's position; the grid and goal
//! consumption stay with the simulation driver.

pub mod chaser;
pub mod eater;
pub mod error;
pub mod mind;
pub mod name;
pub mod roster;


use gc_core::Coord;
use gc_grid::Grid;

pub use chaser::{wander_step, Chaser};
pub use eater::Eater;
pub use error::{AgentError, AgentResult};
pub use mind::{ChaserMind, ChaserMode};
pub use name::random_name;
pub use roster::{AgentStatus, Roster, RosterBuilder, EATER_LABEL};

/// Accept `proposal` only if it is an in-bounds walkable tile; otherwise
/// stay at `from`.
#[inline]
pub fn checked_move(grid: &Grid, from: Coord, proposal: Coord) -> Coord {
    if grid.is_walkable(proposal) { proposal } else { from }
}
