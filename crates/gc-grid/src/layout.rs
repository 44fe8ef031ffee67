//! Text layout loader.
//!
//! # Format
//!
//! One line per grid row, one symbol per tile:
//!
//! | Symbol      | Tile                       |
//! |-------------|----------------------------|
//! | `#`         | wall                       |
//! | `.`         | floor with a goal          |
//! | ` ` or `-`  | floor without a goal       |
//!
//! ```text
//! #####
//! #..-#
//! #.#.#
//! #####
//! ```
//!
//! Trailing empty lines are ignored; a line of spaces is a row of floor.
//! Every other line must have exactly the grid's width in symbols.

use std::path::Path;

use gc_core::Coord;
use tracing::debug;

use crate::{Grid, GridError, GridResult, Tile};

fn parse_symbol(symbol: char) -> Option<Tile> {
    match symbol {
        '#'       => Some(Tile::WALL),
        '.'       => Some(Tile::GOAL),
        ' ' | '-' => Some(Tile::FLOOR),
        _         => None,
    }
}

/// Parse `source` into rows of tiles.  Row lengths are checked against the
/// first row.
fn parse_rows(source: &str) -> GridResult<Vec<Vec<Tile>>> {
    let mut lines: Vec<&str> = source.lines().collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(GridError::EmptyLayout);
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(j, symbol)| {
                parse_symbol(symbol).ok_or(GridError::UnknownTile {
                    line: i + 1,
                    column: j + 1,
                    symbol,
                })
            })
            .collect::<GridResult<Vec<Tile>>>()?;
        rows.push(row);
    }

    let expected = rows[0].len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(GridError::RaggedRow { line: i + 1, expected, got: row.len() });
    }
    Ok(rows)
}

impl Grid {
    /// Build a grid whose size is inferred from the layout.
    pub fn from_layout(source: &str) -> GridResult<Grid> {
        let rows = parse_rows(source)?;
        let mut grid = Grid::new(rows.len(), rows[0].len());
        grid.apply_rows(&rows);
        Ok(grid)
    }

    /// Mark walls and goals on an already-sized grid.
    ///
    /// The layout must match the grid's dimensions exactly.  On error the
    /// grid is left untouched.
    pub fn load_layout(&mut self, source: &str) -> GridResult<()> {
        let rows = parse_rows(source)?;
        let (r, c) = (rows.len(), rows[0].len());
        if r != self.height() || c != self.width() {
            return Err(GridError::DimensionMismatch {
                expected_rows: self.height(),
                expected_cols: self.width(),
                rows:          r,
                cols:          c,
            });
        }
        self.apply_rows(&rows);
        Ok(())
    }

    /// [`load_layout`](Self::load_layout) from a file.
    pub fn load_layout_file(&mut self, path: &Path) -> GridResult<()> {
        let source = std::fs::read_to_string(path)?;
        self.load_layout(&source)?;
        debug!(path = %path.display(), goals = self.goal_count(), "layout loaded");
        Ok(())
    }

    fn apply_rows(&mut self, rows: &[Vec<Tile>]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                self.set_tile(Coord::new(r as i32, c as i32), tile);
            }
        }
    }
}
