//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use gc_agent::RosterBuilder;
use gc_core::rng::entropy_seed;
use gc_core::{Coord, GameConfig, Tick};
use gc_grid::{GoalSeeking, Grid, ThreatParams};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                            |
/// |----------------------|----------------------------------------------------|
/// | `.grid(g)`           | `height × width` grid loaded from `default_layout` |
/// | `.seed(s)`           | `config.seed`, else OS entropy                     |
/// | `.eater_at(c)`       | random walkable tile                               |
/// | `.chasers_at(v)`     | random walkable tiles                              |
///
/// # Example
///
/// ```rust,ignore
/// let config = GameConfig::load(Path::new("conf/conf.yaml"))?;
/// let mut sim = SimBuilder::new(&config).seed(7).build()?;
/// let outcome = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'c> {
    config:     &'c GameConfig,
    grid:       Option<Grid>,
    seed:       Option<u64>,
    eater_at:   Option<Coord>,
    chasers_at: Option<Vec<Coord>>,
}

impl<'c> SimBuilder<'c> {
    pub fn new(config: &'c GameConfig) -> Self {
        Self {
            config,
            grid:       None,
            seed:       None,
            eater_at:   None,
            chasers_at: None,
        }
    }

    /// Use an already-loaded grid instead of reading `default_layout`.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Override the master seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Place the goal-seeker on a fixed, walkable tile.
    pub fn eater_at(mut self, position: Coord) -> Self {
        self.eater_at = Some(position);
        self
    }

    /// Place the pursuers on fixed, walkable tiles.
    ///
    /// Must be length `config.chaser_count`.
    pub fn chasers_at(mut self, positions: Vec<Coord>) -> Self {
        self.chasers_at = Some(positions);
        self
    }

    /// Validate inputs, load the layout if needed, spawn the agents and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let grid = match self.grid {
            Some(g) => g,
            None => {
                let mut g = Grid::new(config.height, config.width);
                g.load_layout_file(&config.default_layout)?;
                g
            }
        };

        // ── Validate fixed spawn positions ────────────────────────────────
        if let Some(p) = self.eater_at {
            if !grid.is_walkable(p) {
                return Err(SimError::UnwalkableSpawn(p));
            }
        }
        if let Some(v) = &self.chasers_at {
            if v.len() != config.chaser_count {
                return Err(SimError::PositionCountMismatch {
                    expected: config.chaser_count,
                    got:      v.len(),
                });
            }
            if let Some(&p) = v.iter().find(|&&p| !grid.is_walkable(p)) {
                return Err(SimError::UnwalkableSpawn(p));
            }
        }

        // ── Spawn ─────────────────────────────────────────────────────────
        let seed = self.seed.or(config.seed).unwrap_or_else(entropy_seed);
        let mut roster = RosterBuilder::new(seed, config.chaser_count).state_ticks(
            config.chaser.min_state_ticks,
            config.chaser.max_state_ticks,
        );
        if let Some(p) = self.eater_at {
            roster = roster.eater_at(p);
        }
        if let Some(v) = self.chasers_at {
            roster = roster.chasers_at(v);
        }
        let roster = roster.build(&grid)?;

        info!(
            seed,
            height = grid.height(),
            width = grid.width(),
            chasers = roster.chasers.len(),
            goals = grid.goal_count(),
            "simulation built"
        );

        Ok(Sim {
            grid,
            roster,
            params:             ThreatParams::new(config.max_danger, config.decay_rate),
            query:              GoalSeeking { danger_penalty: config.danger_penalty },
            tick:               Tick::ZERO,
            goals_eaten:        0,
            seed,
            timing:             config.timing.clone(),
            max_decision_ticks: config.max_decision_ticks,
            outcome:            None,
        })
    }
}
