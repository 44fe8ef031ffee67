//! The static tile map.
//!
//! # Data layout
//!
//! Tiles are stored row-major in one `Vec<Tile>`; the tile at `(row, col)`
//! lives at `row * width + col`.  Every accessor takes a signed [`Coord`] and
//! bounds-checks it, so callers can probe a proposed step off the edge of the
//! map without special cases: out-of-bounds reads return `None` / `false`.

use gc_core::Coord;

/// One map cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Fixed for the lifetime of the grid.
    pub walkable: bool,
    /// Cleared when the goal-seeker consumes the goal.
    pub has_goal: bool,
}

impl Tile {
    pub const FLOOR: Tile = Tile { walkable: true,  has_goal: false };
    pub const GOAL:  Tile = Tile { walkable: true,  has_goal: true };
    pub const WALL:  Tile = Tile { walkable: false, has_goal: false };
}

/// A `height × width` tile map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width:  usize,
    tiles:  Vec<Tile>,
}

impl Grid {
    /// Allocate a `height × width` grid of open floor without goals.
    ///
    /// Walls and goals are applied afterwards with
    /// [`load_layout`](Self::load_layout) or [`set_tile`](Self::set_tile).
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width, tiles: vec![Tile::FLOOR; height * width] }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of tiles, walkable or not.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // ── Indexing ──────────────────────────────────────────────────────────

    /// Flat index of `c`, or `None` when it lies outside the map.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (row, col) = (c.row as usize, c.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index / self.width) as i32, (index % self.width) as i32)
    }

    // ── Tile access ───────────────────────────────────────────────────────

    /// The tile at `c`, or `None` when out of bounds.
    #[inline]
    pub fn tile(&self, c: Coord) -> Option<&Tile> {
        self.index_of(c).map(|i| &self.tiles[i])
    }

    /// `true` only for in-bounds walkable tiles.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.tile(c).is_some_and(|t| t.walkable)
    }

    /// Overwrite the tile at `c`.  Returns `false` (and changes nothing)
    /// when `c` is out of bounds.
    pub fn set_tile(&mut self, c: Coord, tile: Tile) -> bool {
        match self.index_of(c) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Clear the goal at `c`.  Returns `true` if a goal was present.
    pub fn consume_goal(&mut self, c: Coord) -> bool {
        match self.index_of(c) {
            Some(i) if self.tiles[i].has_goal => {
                self.tiles[i].has_goal = false;
                true
            }
            _ => false,
        }
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.tiles.len()).map(|i| self.coord_of(i))
    }

    /// Walkable coordinates in row-major order.
    pub fn walkable_coords(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.is_walkable(c)).collect()
    }

    /// Coordinates that still carry a goal, in row-major order.
    pub fn goals(&self) -> impl Iterator<Item = Coord> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.has_goal)
            .map(|(i, _)| self.coord_of(i))
    }

    pub fn goal_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.has_goal).count()
    }

    /// Walkable neighbours of `c`, in up/right/down/left order.
    pub fn walkable_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors()
            .into_iter()
            .filter(move |&n| self.is_walkable(n))
    }
}
