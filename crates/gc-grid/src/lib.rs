//! `gc-grid`: tile grid, threat field, and route planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid`, `Tile`                                              |
//! | [`layout`]  | text layout parser (`Grid::load_layout`, `Grid::from_layout`) |
//! | [`threat`]  | `ThreatParams`, `GraphNode`, `GraphSnapshot` (the per-tick graph) |
//! | [`planner`] | `RouteQuery` trait, `search`, `GoalSeeking`, `Pursuit`      |
//! | [`error`]   | `GridError`, `PlanError`                                    |
//!
//! # Per-tick flow
//!
//! ```text
//! Grid ──build(pursuers, params)──▶ GraphSnapshot ──search(query)──▶ next step
//! ```
//!
//! The grid is long-lived and only mutated by goal consumption.  A snapshot
//! is built fresh for every decision tick and dropped once all agents have
//! planned against it.

pub mod error;
pub mod grid;
pub mod layout;
pub mod planner;
pub mod threat;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult, PlanError, PlanResult};
pub use grid::{Grid, Tile};
pub use planner::{search, GoalSeeking, Pursuit, RouteQuery, DEFAULT_DANGER_PENALTY};
pub use threat::{GraphNode, GraphSnapshot, ThreatParams};
