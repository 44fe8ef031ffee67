//! Simulation time model.
//!
//! # Two timing domains
//!
//! Decisions are counted in [`Tick`]s: one tick is one round in which every
//! agent plans and applies at most one move.  The paced (interactive) loop
//! runs frames at a fixed rate and only advances a tick when
//! [`MoveTimer`] reports that the movement interval has elapsed, so frame
//! smoothness and decision cadence are independent.  The headless loop
//! advances ticks back to back and never touches a `MoveTimer`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute decision-tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── MoveTimer ─────────────────────────────────────────────────────────────────

/// Gates decision ticks behind a millisecond interval.
///
/// Times are milliseconds on any monotonic clock the caller chooses; the
/// timer only compares differences.
#[derive(Clone, Debug)]
pub struct MoveTimer {
    /// Minimum milliseconds between two decisions.
    pub move_delay_ms: u64,
    last_move_ms: Option<u64>,
}

impl MoveTimer {
    pub fn new(move_delay_ms: u64) -> Self {
        Self { move_delay_ms, last_move_ms: None }
    }

    /// `true` (and records `now_ms` as the last move) when at least
    /// `move_delay_ms` have passed since the previous move.  The first call
    /// always fires.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        let due = match self.last_move_ms {
            None       => true,
            Some(last) => now_ms.saturating_sub(last) >= self.move_delay_ms,
        };
        if due {
            self.last_move_ms = Some(now_ms);
        }
        due
    }
}
