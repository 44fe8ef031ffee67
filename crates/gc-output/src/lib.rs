//! `gc-output`: simulation output writers for grid-chase.
//!
//! | Source                        | File            | One row per        |
//! |-------------------------------|-----------------|--------------------|
//! | [`SimOutputObserver`]         | `decisions.csv` | decision tick      |
//! | [`write_batch`]               | `runs.csv`      | completed batch run |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


use gc_sim::BatchReport;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DecisionRow, RunRow};
pub use writer::OutputWriter;

/// Write every completed run of `report` and finish the writer.
///
/// Failed runs have no outcome and are not written.
pub fn write_batch<W: OutputWriter>(writer: &mut W, report: &BatchReport) -> OutputResult<()> {
    let rows: Vec<RunRow> = report.records.iter().map(RunRow::from).collect();
    writer.write_runs(&rows)?;
    writer.finish()
}
