//! Threat field and the per-tick navigation graph.
//!
//! # Algorithm
//!
//! Danger radiates from every pursuer at once.  A multi-source breadth-first
//! search is seeded with all pursuer tiles at hop 0; each further hop costs
//! `decay_rate`:
//!
//! ```text
//! danger(d) = max(max_danger - d * decay_rate, 0)
//! ```
//!
//! Because every source starts at the same strength and decays at the same
//! rate, the first (smallest) hop count that reaches a tile also gives the
//! largest contending value, so overlapping fields combine by **max**, never
//! by sum, and `0 <= danger <= max_danger` holds everywhere.  Propagation
//! stops at the first hop whose value would be zero.  Unreached tiles have
//! danger 0.
//!
//! Cost is O(V + E) per build; the graph is rebuilt from scratch every tick
//! since pursuers move every tick.
//!
//! Non-positive `max_danger` or `decay_rate` yields an all-zero field.

use std::collections::VecDeque;

use gc_core::Coord;

use crate::Grid;

// ── ThreatParams ──────────────────────────────────────────────────────────────

/// Shape of the danger field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThreatParams {
    pub max_danger: f32,
    pub decay_rate: f32,
}

impl ThreatParams {
    pub fn new(max_danger: f32, decay_rate: f32) -> Self {
        Self { max_danger, decay_rate }
    }

    /// `true` when the field is zero everywhere.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.max_danger > 0.0 && self.decay_rate > 0.0)
    }

    /// Danger `hops` steps away from the nearest pursuer.
    #[inline]
    pub fn danger_at(&self, hops: u32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        (self.max_danger - hops as f32 * self.decay_rate).max(0.0)
    }
}

// ── GraphNode ─────────────────────────────────────────────────────────────────

/// A walkable tile as seen by the planner during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub coord: Coord,
    /// Walkable neighbours in up/right/down/left order.
    pub adjacent: Vec<Coord>,
    /// In `[0, max_danger]`.
    pub danger: f32,
    /// Copied from the grid when the snapshot was built.
    pub has_goal: bool,
}

// ── GraphSnapshot ─────────────────────────────────────────────────────────────

/// Navigation graph for one decision tick.
///
/// Holds one slot per grid tile; blocked tiles have no node and are never
/// part of a search.  Owned by the tick that built it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSnapshot {
    height: usize,
    width:  usize,
    nodes:  Vec<Option<GraphNode>>,
    goals:  Vec<Coord>,
}

impl GraphSnapshot {
    /// Build the graph for the current tile state and pursuer positions.
    ///
    /// Pursuer positions that are out of bounds or blocked seed nothing.
    pub fn build(grid: &Grid, pursuers: &[Coord], params: ThreatParams) -> GraphSnapshot {
        let hops = nearest_pursuer_hops(grid, pursuers, params);

        let nodes: Vec<Option<GraphNode>> = (0..grid.len())
            .map(|i| {
                let coord = grid.coord_of(i);
                let tile = grid.tile(coord)?;
                if !tile.walkable {
                    return None;
                }
                let danger = match hops[i] {
                    u32::MAX => 0.0,
                    h        => params.danger_at(h),
                };
                Some(GraphNode {
                    coord,
                    adjacent: grid.walkable_neighbors(coord).collect(),
                    danger,
                    has_goal: tile.has_goal,
                })
            })
            .collect();

        let goals = nodes
            .iter()
            .flatten()
            .filter(|n| n.has_goal)
            .map(|n| n.coord)
            .collect();

        GraphSnapshot { height: grid.height(), width: grid.width(), nodes, goals }
    }

    /// Slot index of `c` if it holds a node.
    #[inline]
    pub fn slot(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (row, col) = (c.row as usize, c.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        let i = row * self.width + col;
        self.nodes[i].as_ref().map(|_| i)
    }

    /// Number of slots (walkable or not); sizes the planner's scratch arrays.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<&GraphNode> {
        self.slot(c).and_then(|i| self.nodes[i].as_ref())
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.slot(c).is_some()
    }

    /// Danger at `c`; 0 for blocked or out-of-bounds tiles.
    #[inline]
    pub fn danger(&self, c: Coord) -> f32 {
        self.get(c).map_or(0.0, |n| n.danger)
    }

    /// Number of walkable nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.iter().flatten()
    }

    /// Goal tiles at build time, row-major.
    pub fn goals(&self) -> &[Coord] {
        &self.goals
    }
}

/// Multi-source BFS hop counts; `u32::MAX` for tiles the field never reaches.
fn nearest_pursuer_hops(grid: &Grid, pursuers: &[Coord], params: ThreatParams) -> Vec<u32> {
    let mut hops = vec![u32::MAX; grid.len()];
    if params.is_degenerate() {
        return hops;
    }

    let mut queue = VecDeque::with_capacity(pursuers.len());
    for &p in pursuers {
        if !grid.is_walkable(p) {
            continue;
        }
        if let Some(i) = grid.index_of(p) {
            if hops[i] == u32::MAX {
                hops[i] = 0;
                queue.push_back((p, i));
            }
        }
    }

    while let Some((c, i)) = queue.pop_front() {
        let next = hops[i] + 1;
        if params.danger_at(next) <= 0.0 {
            continue;
        }
        for n in grid.walkable_neighbors(c) {
            if let Some(j) = grid.index_of(n) {
                if hops[j] == u32::MAX {
                    hops[j] = next;
                    queue.push_back((n, j));
                }
            }
        }
    }
    hops
}
