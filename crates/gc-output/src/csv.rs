//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `runs.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DecisionRow, OutputResult, RunRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    runs:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record(["tick", "eater_row", "eater_col", "goals_left", "pursuing", "danger"])?;

        let mut runs = Writer::from_path(dir.join("runs.csv"))?;
        runs.write_record(["run", "seed", "outcome", "decisions", "goals_eaten"])?;

        Ok(Self {
            decisions,
            runs,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.decisions.write_record(&[
            row.tick.to_string(),
            row.eater_row.to_string(),
            row.eater_col.to_string(),
            row.goals_left.to_string(),
            row.pursuing.to_string(),
            row.danger.to_string(),
        ])?;
        Ok(())
    }

    fn write_runs(&mut self, rows: &[RunRow]) -> OutputResult<()> {
        for row in rows {
            self.runs.write_record(&[
                row.run.to_string(),
                row.seed.to_string(),
                row.outcome.to_string(),
                row.decisions.to_string(),
                row.goals_eaten.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
