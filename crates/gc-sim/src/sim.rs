//! The `Sim` struct and its decision loops.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use gc_agent::Roster;
use gc_core::{AgentId, MoveTimer, Tick, TimingConfig};
use gc_grid::{GoalSeeking, GraphSnapshot, Grid, ThreatParams};

use crate::{SimError, SimObserver, SimResult, SimView};

/// Outcome label of a goal-seeker win.
pub const EATER: &str = "eater";
/// Outcome label of a pursuer win.
pub const CHASER: &str = "chaser";

// ── Outcome ───────────────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every goal tile was consumed.
    EaterWins,
    /// A pursuer reached the goal-seeker's tile.
    ChaserWins { by: AgentId },
}

impl Outcome {
    /// `"eater"` or `"chaser"`.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::EaterWins         => EATER,
            Outcome::ChaserWins { .. } => CHASER,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One simulation instance.
///
/// Owns its grid and agents outright, so independent instances never share
/// mutable state.  Each call to [`step`](Self::step) is one decision tick:
///
/// 1. **Snapshot**: rebuild the threat graph from the current pursuer tiles.
/// 2. **Goal-seeker** plans and moves; capture is checked.
/// 3. **Pursuers**, in `AgentId` order: roll the state timer, move, count
///    the timer down; capture is checked after each one.
/// 4. **Consume**: without a capture, the goal under the goal-seeker is
///    eaten.
/// 5. **Exhaustion**: no goals left means the goal-seeker wins.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// The map.  Only mutated by goal consumption in step 4.
    pub grid: Grid,

    pub roster: Roster,

    /// Shape of the per-tick danger field.
    pub params: ThreatParams,

    /// Goal-seeker route query (carries the danger penalty).
    pub query: GoalSeeking,

    /// Decision ticks completed.
    pub tick: Tick,

    pub goals_eaten: usize,

    /// Master seed this instance was built from.
    pub seed: u64,

    pub(crate) timing:             TimingConfig,
    pub(crate) max_decision_ticks: u64,
    pub(crate) outcome:            Option<Outcome>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The decided outcome, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn view(&self) -> SimView<'_> {
        SimView {
            tick:        self.tick,
            grid:        &self.grid,
            roster:      &self.roster,
            goals_eaten: self.goals_eaten,
        }
    }

    /// Run decision ticks back to back until an outcome is decided.
    ///
    /// Headless: no frames, no sleeping, no timer.  Fails with
    /// [`SimError::TickLimit`] if no outcome is reached within
    /// `max_decision_ticks`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            self.check_tick_limit()?;
            self.step(observer)?;
        }
    }

    /// Interactive loop: frames at `frame_rate_hz`, a decision tick only
    /// when `move_delay_ms` has elapsed since the previous one.
    ///
    /// Calls [`SimObserver::on_frame`] every frame.  Returns `Ok(None)` when
    /// the observer stops the loop before an outcome.
    pub fn run_paced<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Outcome>> {
        let frame = Duration::from_secs_f64(1.0 / f64::from(self.timing.frame_rate_hz.max(1)));
        let mut timer = MoveTimer::new(self.timing.move_delay_ms);
        let clock = Instant::now();

        loop {
            let frame_start = Instant::now();

            if self.outcome.is_none() && timer.ready(clock.elapsed().as_millis() as u64) {
                self.check_tick_limit()?;
                self.step(observer)?;
            }
            if !observer.on_frame(&self.view()) {
                return Ok(self.outcome);
            }
            if self.outcome.is_some() {
                return Ok(self.outcome);
            }

            let spent = frame_start.elapsed();
            if spent < frame {
                std::thread::sleep(frame - spent);
            }
        }
    }

    /// Advance one decision tick.  Returns the outcome once decided; calling
    /// again after that is a no-op.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Outcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }
        if self.grid.goal_count() == 0 {
            self.finish(Outcome::EaterWins, observer);
            return Ok(self.outcome);
        }

        // ── 1. Snapshot ───────────────────────────────────────────────────
        let snapshot = GraphSnapshot::build(&self.grid, &self.roster.chaser_positions(), self.params);

        // ── 2. Goal-seeker ────────────────────────────────────────────────
        let target = self.roster.eater.advance(&self.grid, &snapshot, &self.query);
        let mut outcome = self.roster.capturer().map(|by| Outcome::ChaserWins { by });

        // ── 3. Pursuers ───────────────────────────────────────────────────
        if outcome.is_none() {
            for chaser in &mut self.roster.chasers {
                if chaser.advance(&self.grid, &snapshot, target) == target {
                    outcome = Some(Outcome::ChaserWins { by: chaser.id });
                    break;
                }
            }
        }

        self.tick = self.tick + 1;

        // ── 4./5. Consume and check exhaustion ────────────────────────────
        if outcome.is_none() && self.grid.consume_goal(target) {
            self.goals_eaten += 1;
            observer.on_goal_eaten(self.tick, target);
            if self.grid.goal_count() == 0 {
                outcome = Some(Outcome::EaterWins);
            }
        }

        debug!(
            tick = self.tick.0,
            eater = %target,
            goals_left = self.grid.goal_count(),
            danger = snapshot.danger(target),
            "decision"
        );
        observer.on_decision(&self.view(), &snapshot);

        if let Some(outcome) = outcome {
            self.finish(outcome, observer);
        }
        Ok(self.outcome)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_tick_limit(&self) -> SimResult<()> {
        if self.tick.0 >= self.max_decision_ticks {
            return Err(SimError::TickLimit { ticks: self.tick.0 });
        }
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, outcome: Outcome, observer: &mut O) {
        self.outcome = Some(outcome);
        info!(
            seed = self.seed,
            %outcome,
            ticks = self.tick.0,
            goals_eaten = self.goals_eaten,
            "simulation finished"
        );
        observer.on_sim_end(self.tick, outcome);
    }
}
