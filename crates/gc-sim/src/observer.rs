//! Simulation observer trait for rendering, progress reporting and data
//! collection.

use gc_agent::Roster;
use gc_core::{Coord, Tick};
use gc_grid::{GraphSnapshot, Grid};

use crate::Outcome;

/// Read-only view of a running simulation.
#[derive(Copy, Clone, Debug)]
pub struct SimView<'a> {
    /// Decision ticks completed so far.
    pub tick:        Tick,
    pub grid:        &'a Grid,
    pub roster:      &'a Roster,
    pub goals_eaten: usize,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points of its loops.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: heat-map recorder
///
/// ```rust,ignore
/// struct PeakDanger(f32);
///
/// impl SimObserver for PeakDanger {
///     fn on_decision(&mut self, _view: &SimView<'_>, snapshot: &GraphSnapshot) {
///         for node in snapshot.nodes() {
///             self.0 = self.0.max(node.danger);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every decision tick, once all agents have moved.
    ///
    /// `snapshot` is the graph the agents planned against this tick.
    fn on_decision(&mut self, _view: &SimView<'_>, _snapshot: &GraphSnapshot) {}

    /// Called when the goal-seeker consumes the goal at `at`.
    fn on_goal_eaten(&mut self, _tick: Tick, _at: Coord) {}

    /// Called once per frame by [`Sim::run_paced`][crate::Sim::run_paced].
    ///
    /// Return `false` to stop the loop (e.g. the window was closed).
    fn on_frame(&mut self, _view: &SimView<'_>) -> bool {
        true
    }

    /// Called once when the outcome is decided.
    fn on_sim_end(&mut self, _final_tick: Tick, _outcome: Outcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
