//! Tile coordinates and the four cardinal directions.
//!
//! Coordinates are signed so that a proposed step off the edge of the map is
//! still representable; bounds are checked by the grid, which fails closed.
//! The derived `Ord` is row-major (`row` first, then `col`), which the
//! planner relies on for deterministic tie-breaking.

use std::fmt;

/// A `(row, col)` tile position.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `dir`.  May lie outside the map.
    #[inline]
    pub fn step(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// The four neighbours in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [Coord; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance in tiles.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Cardinal movement direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed enumeration order: up, right, down, left.  Neighbour lists and
    /// random direction draws both use this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(d_row, d_col)` for one step.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down  => (1, 0),
            Direction::Left  => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        };
        f.write_str(s)
    }
}
