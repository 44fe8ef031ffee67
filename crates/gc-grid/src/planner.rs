//! Best-first route search over a [`GraphSnapshot`].
//!
//! # One algorithm, two queries
//!
//! [`search`] is a single A*-style loop parameterised by a [`RouteQuery`]:
//! a goal predicate, a heuristic, and a danger weight.  Each frontier entry
//! is ordered by
//!
//! ```text
//! f(n) = g(n) + h(n) + danger_weight * danger(n)
//! ```
//!
//! with `g` the hop count from the start.  Ties on `f` break on the
//! row-major coordinate order, so the result is fully deterministic.
//!
//! | Query           | Goal                 | Heuristic                     | Danger weight |
//! |-----------------|----------------------|-------------------------------|---------------|
//! | [`GoalSeeking`] | tile has a goal      | Manhattan to nearest goal     | large (10 000) |
//! | [`Pursuit`]     | tile == target       | Manhattan to target           | 0             |
//!
//! # Frontier without decrease-key
//!
//! A node may sit in the heap several times.  Relaxation only happens when
//! a strictly shorter `g` is found, and each heap entry carries the `g` it
//! was pushed with; an entry whose `g` is worse than the best known one is
//! stale and skipped on pop.  Predecessors are recorded on relaxation only,
//! giving one best-known path tree rooted at the start.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use gc_core::Coord;

use crate::{GraphSnapshot, PlanError, PlanResult};

/// Danger weight used by the goal-seeker: any difference in danger outweighs
/// any realistic difference in distance.
pub const DEFAULT_DANGER_PENALTY: f64 = 10_000.0;

// ── RouteQuery ────────────────────────────────────────────────────────────────

/// What a search is looking for.
pub trait RouteQuery {
    /// `true` if the search may stop at `c`.
    fn is_goal(&self, c: Coord, snapshot: &GraphSnapshot) -> bool;

    /// Estimated remaining hops from `c`.
    fn heuristic(&self, c: Coord, snapshot: &GraphSnapshot) -> u32;

    /// Cost added per unit of danger.  Zero ignores the threat field.
    fn danger_weight(&self) -> f64;
}

/// Route to the closest goal tile, avoiding danger first and distance second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GoalSeeking {
    pub danger_penalty: f64,
}

impl Default for GoalSeeking {
    fn default() -> Self {
        Self { danger_penalty: DEFAULT_DANGER_PENALTY }
    }
}

impl RouteQuery for GoalSeeking {
    fn is_goal(&self, c: Coord, snapshot: &GraphSnapshot) -> bool {
        snapshot.get(c).is_some_and(|n| n.has_goal)
    }

    fn heuristic(&self, c: Coord, snapshot: &GraphSnapshot) -> u32 {
        snapshot
            .goals()
            .iter()
            .map(|&g| c.manhattan(g))
            .min()
            .unwrap_or(0)
    }

    fn danger_weight(&self) -> f64 {
        self.danger_penalty
    }
}

/// Route straight at a target tile; the threat field is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pursuit {
    pub target: Coord,
}

impl RouteQuery for Pursuit {
    fn is_goal(&self, c: Coord, _snapshot: &GraphSnapshot) -> bool {
        c == self.target
    }

    fn heuristic(&self, c: Coord, _snapshot: &GraphSnapshot) -> u32 {
        c.manhattan(self.target)
    }

    fn danger_weight(&self) -> f64 {
        0.0
    }
}

// ── Frontier ordering ─────────────────────────────────────────────────────────

/// Total order over `f64` priorities (`f` values are never NaN, but the heap
/// still needs `Ord`).
#[derive(Copy, Clone, Debug, PartialEq)]
struct Priority(f64);

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ── search ────────────────────────────────────────────────────────────────────

/// Return the next tile to step onto from `start` toward the nearest tile
/// satisfying `query`.
///
/// - `Ok(start)` when `start` itself satisfies the query.
/// - `Err(PlanError::NoPath)` when the frontier empties first.
/// - `Err(PlanError::StartNotInGraph)` when `start` is not walkable.
pub fn search<Q: RouteQuery + ?Sized>(
    snapshot: &GraphSnapshot,
    start:    Coord,
    query:    &Q,
) -> PlanResult<Coord> {
    let start_slot = snapshot.slot(start).ok_or(PlanError::StartNotInGraph(start))?;

    let n = snapshot.slot_count();
    // best[v] = best known hop count to reach v.
    let mut best = vec![u32::MAX; n];
    // prev[v] = tile that reached v on the best known path.
    let mut prev: Vec<Option<Coord>> = vec![None; n];
    best[start_slot] = 0;

    // Min-heap: (f, coord, g).  Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(Priority, Coord, u32)>> = BinaryHeap::new();
    heap.push(Reverse((Priority(0.0), start, 0)));

    let weight = query.danger_weight();

    while let Some(Reverse((_, coord, g))) = heap.pop() {
        let Some(node) = snapshot.get(coord) else { continue };
        let Some(slot) = snapshot.slot(coord) else { continue };

        // Skip stale heap entries.
        if g > best[slot] {
            continue;
        }

        if query.is_goal(coord, snapshot) {
            return first_step(snapshot, &prev, start, coord).ok_or(PlanError::NoPath { from: start });
        }

        for &next in &node.adjacent {
            let Some(next_slot) = snapshot.slot(next) else { continue };
            let new_g = g + 1;
            if new_g < best[next_slot] {
                best[next_slot] = new_g;
                prev[next_slot] = Some(coord);
                let f = new_g as f64
                    + query.heuristic(next, snapshot) as f64
                    + weight * snapshot.danger(next) as f64;
                heap.push(Reverse((Priority(f), next, new_g)));
            }
        }
    }

    Err(PlanError::NoPath { from: start })
}

/// Walk predecessors back from `target` to the tile right after `start`.
fn first_step(
    snapshot: &GraphSnapshot,
    prev:     &[Option<Coord>],
    start:    Coord,
    target:   Coord,
) -> Option<Coord> {
    if target == start {
        return Some(start);
    }
    let mut cur = target;
    loop {
        let p = prev[snapshot.slot(cur)?]?;
        if p == start {
            return Some(cur);
        }
        cur = p;
    }
}
