//! The `OutputWriter` trait implemented by output backends.

use crate::{DecisionRow, OutputResult, RunRow};

/// Sink for decision traces and batch results.
///
/// Errors raised while a simulation is running are stored by
/// [`SimOutputObserver`][crate::SimOutputObserver] and retrieved with
/// `take_error`.
pub trait OutputWriter {
    /// Write one decision row.
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()>;

    /// Write a batch of run rows.
    fn write_runs(&mut self, rows: &[RunRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
