//! Grid and planner error types.

use thiserror::Error;

use gc_core::Coord;

/// Errors produced while building a grid from a layout.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("layout line {line}, column {column}: unknown tile symbol {symbol:?}")]
    UnknownTile { line: usize, column: usize, symbol: char },

    #[error("layout line {line} has {got} tiles, expected {expected}")]
    RaggedRow { line: usize, expected: usize, got: usize },

    #[error("layout is {rows}x{cols} but the grid is {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows:          usize,
        cols:          usize,
    },

    #[error("layout contains no rows")]
    EmptyLayout,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;

/// Outcomes of a route search that produced no next step.
///
/// Neither is fatal: the caller keeps its agent in place for the tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no satisfying tile is reachable from {from}")]
    NoPath { from: Coord },

    #[error("start {0} is not a walkable tile of the snapshot")]
    StartNotInGraph(Coord),
}

pub type PlanResult<T> = Result<T, PlanError>;
