//! The agent set of one simulation instance.
//!
//! # Spawning
//!
//! [`RosterBuilder`] draws everything random about the initial agent set
//! from one [`SimRng`] seeded with the run's master seed, in a fixed order:
//! goal-seeker tile, goal-seeker name, then tile and name of each pursuer.
//! Tiles are uniform over the walkable tiles and may coincide.  Each
//! pursuer additionally gets its own [`AgentRng`] for wander draws and state
//! timers.
//!
//! ```rust,ignore
//! let roster = RosterBuilder::new(seed, config.chaser_count)
//!     .state_ticks(20, 70)
//!     .build(&grid)?;
//! ```

use gc_core::{AgentId, AgentRng, Coord, SimRng};
use gc_grid::Grid;

use crate::{random_name, AgentError, AgentResult, Chaser, ChaserMind, Eater};

/// Status label of the goal-seeker.
pub const EATER_LABEL: &str = "eat";

/// One status-panel row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentStatus<'a> {
    pub id:       AgentId,
    pub name:     &'a str,
    pub label:    &'static str,
    pub position: Coord,
}

/// The goal-seeker and its pursuers.
#[derive(Clone, Debug)]
pub struct Roster {
    pub eater:   Eater,
    /// Pursuers in `AgentId` order, starting at `AgentId(1)`.
    pub chasers: Vec<Chaser>,
}

impl Roster {
    /// Goal-seeker plus pursuers.
    pub fn agent_count(&self) -> usize {
        1 + self.chasers.len()
    }

    pub fn chaser_positions(&self) -> Vec<Coord> {
        self.chasers.iter().map(|c| c.position).collect()
    }

    /// First pursuer standing on the goal-seeker's tile.
    pub fn capturer(&self) -> Option<AgentId> {
        self.chasers
            .iter()
            .find(|c| c.position == self.eater.position)
            .map(|c| c.id)
    }

    /// One row per agent, goal-seeker first.
    pub fn statuses(&self) -> Vec<AgentStatus<'_>> {
        let mut rows = Vec::with_capacity(self.agent_count());
        rows.push(AgentStatus {
            id:       self.eater.id,
            name:     &self.eater.name,
            label:    EATER_LABEL,
            position: self.eater.position,
        });
        rows.extend(self.chasers.iter().map(|c| AgentStatus {
            id:       c.id,
            name:     &c.name,
            label:    c.mode().label(),
            position: c.position,
        }));
        rows
    }
}

// ── RosterBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for a [`Roster`].
///
/// Fixed positions are taken as given; callers check them against the grid.
pub struct RosterBuilder {
    seed:         u64,
    chaser_count: usize,
    min_ticks:    u32,
    max_ticks:    u32,
    eater_at:     Option<Coord>,
    chasers_at:   Option<Vec<Coord>>,
}

impl RosterBuilder {
    pub fn new(seed: u64, chaser_count: usize) -> Self {
        Self {
            seed,
            chaser_count,
            min_ticks:  20,
            max_ticks:  70,
            eater_at:   None,
            chasers_at: None,
        }
    }

    /// Inclusive range of pursuer state durations.
    pub fn state_ticks(mut self, min_ticks: u32, max_ticks: u32) -> Self {
        self.min_ticks = min_ticks;
        self.max_ticks = max_ticks;
        self
    }

    /// Place the goal-seeker instead of spawning it at random.
    pub fn eater_at(mut self, position: Coord) -> Self {
        self.eater_at = Some(position);
        self
    }

    /// Place the pursuers instead of spawning them at random.  Overrides
    /// the pursuer count.
    pub fn chasers_at(mut self, positions: Vec<Coord>) -> Self {
        self.chaser_count = positions.len();
        self.chasers_at = Some(positions);
        self
    }

    pub fn build(self, grid: &Grid) -> AgentResult<Roster> {
        let walkable = grid.walkable_coords();
        let mut spawn = SimRng::new(self.seed);

        let pick = |fixed: Option<Coord>, rng: &mut SimRng| -> AgentResult<Coord> {
            match fixed {
                Some(c) => Ok(c),
                None    => rng.choose(&walkable).copied().ok_or(AgentError::NoWalkableTiles),
            }
        };

        let eater_pos = pick(self.eater_at, &mut spawn)?;
        let eater = Eater::new(random_name(&mut spawn), eater_pos);

        let mut chasers = Vec::with_capacity(self.chaser_count);
        for i in 0..self.chaser_count {
            let id = AgentId(i as u32 + 1);
            let fixed = self.chasers_at.as_ref().map(|v| v[i]);
            let position = pick(fixed, &mut spawn)?;
            let name = random_name(&mut spawn);
            let mut rng = AgentRng::new(self.seed, id);
            let mind = ChaserMind::new(self.min_ticks, self.max_ticks, &mut rng)?;
            chasers.push(Chaser::new(id, name, position, mind, rng));
        }

        Ok(Roster { eater, chasers })
    }
}
