//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use gc_agent::ChaserMode;
use gc_core::Tick;
use gc_grid::GraphSnapshot;
use gc_sim::{Outcome, SimObserver, SimView};

use crate::row::DecisionRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one [`DecisionRow`] per decision tick to any
/// [`OutputWriter`] backend and finishes the writer when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_decision(&mut self, view: &SimView<'_>, snapshot: &GraphSnapshot) {
        let eater = view.roster.eater.position;
        let row = DecisionRow {
            tick:       view.tick.0,
            eater_row:  eater.row,
            eater_col:  eater.col,
            goals_left: view.grid.goal_count() as u64,
            pursuing:   view
                .roster
                .chasers
                .iter()
                .filter(|c| c.mode() == ChaserMode::Pursue)
                .count() as u32,
            danger:     snapshot.danger(eater),
        };
        let result = self.writer.write_decision(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _outcome: Outcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
