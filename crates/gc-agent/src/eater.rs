//! The goal-seeking agent.

use tracing::debug;

use gc_core::{AgentId, Coord};
use gc_grid::{search, GoalSeeking, GraphSnapshot, Grid};

use crate::checked_move;

/// Collects goal tiles while steering clear of the threat field.
///
/// Has a single behaviour: every decision it plans a danger-avoiding route
/// to the nearest goal and takes its first step.
#[derive(Clone, Debug, PartialEq)]
pub struct Eater {
    pub id:       AgentId,
    pub name:     String,
    pub position: Coord,
}

impl Eater {
    pub fn new(name: String, position: Coord) -> Self {
        Self { id: AgentId::EATER, name, position }
    }

    /// The step the route planner proposes.  Holds position when no goal is
    /// reachable.
    pub fn decide(&self, snapshot: &GraphSnapshot, query: &GoalSeeking) -> Coord {
        match search(snapshot, self.position, query) {
            Ok(next) => next,
            Err(e) => {
                debug!(agent = %self.id, error = %e, "goal-seeker holds position");
                self.position
            }
        }
    }

    /// Decide and move.  Returns the new position.
    pub fn advance(&mut self, grid: &Grid, snapshot: &GraphSnapshot, query: &GoalSeeking) -> Coord {
        let proposal = self.decide(snapshot, query);
        self.position = checked_move(grid, self.position, proposal);
        self.position
    }
}
