//! The pursuer agent and its wander policy.

use tracing::debug;

use gc_core::{AgentId, AgentRng, Coord};
use gc_grid::{search, GraphSnapshot, Grid, Pursuit};

use crate::{checked_move, ChaserMind, ChaserMode};

/// A uniformly random walkable neighbour of `from`.
///
/// Choosing among the valid directions is distributed exactly like redrawing
/// a random direction until a valid one comes up, but never loops.  Returns
/// `None` on a tile with no walkable neighbour.
pub fn wander_step(grid: &Grid, from: Coord, rng: &mut AgentRng) -> Option<Coord> {
    let mut options = [from; 4];
    let mut n = 0;
    for next in grid.walkable_neighbors(from) {
        options[n] = next;
        n += 1;
    }
    rng.choose(&options[..n]).copied()
}

/// Alternates between wandering and chasing the goal-seeker.
///
/// Owns its RNG so its random draws are independent of every other agent.
#[derive(Clone, Debug)]
pub struct Chaser {
    pub id:       AgentId,
    pub name:     String,
    pub position: Coord,
    pub mind:     ChaserMind,
    rng:          AgentRng,
}

impl Chaser {
    pub fn new(id: AgentId, name: String, position: Coord, mind: ChaserMind, rng: AgentRng) -> Self {
        Self { id, name, position, mind, rng }
    }

    pub fn mode(&self) -> ChaserMode {
        self.mind.mode()
    }

    /// One decision: roll the state timer, propose a step in the current
    /// mode, and count the timer down.  Does not move.
    pub fn decide(&mut self, grid: &Grid, snapshot: &GraphSnapshot, target: Coord) -> Coord {
        if let Some(mode) = self.mind.roll(&mut self.rng) {
            debug!(agent = %self.id, %mode, ticks = self.mind.remaining(), "pursuer switches mode");
        }

        let proposal = match self.mind.mode() {
            ChaserMode::Wander => wander_step(grid, self.position, &mut self.rng)
                .unwrap_or(self.position),
            ChaserMode::Pursue => match search(snapshot, self.position, &Pursuit { target }) {
                Ok(next) => next,
                Err(e) => {
                    debug!(agent = %self.id, error = %e, "pursuer holds position");
                    self.position
                }
            },
        };

        self.mind.tick_down();
        proposal
    }

    /// Decide and move.  Returns the new position.
    pub fn advance(&mut self, grid: &Grid, snapshot: &GraphSnapshot, target: Coord) -> Coord {
        let proposal = self.decide(grid, snapshot, target);
        self.position = checked_move(grid, self.position, proposal);
        self.position
    }
}
