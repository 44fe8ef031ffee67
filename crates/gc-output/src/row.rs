//! Plain data row types written by output backends.

use gc_sim::RunRecord;

/// State after one decision tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRow {
    pub tick:       u64,
    pub eater_row:  i32,
    pub eater_col:  i32,
    pub goals_left: u64,
    /// Pursuers currently in pursue mode.
    pub pursuing:   u32,
    /// Danger of the tile the goal-seeker moved onto, from the snapshot it
    /// planned against.
    pub danger:     f32,
}

/// One completed batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRow {
    pub run:         u64,
    pub seed:        u64,
    /// `"eater"` or `"chaser"`.
    pub outcome:     &'static str,
    pub decisions:   u64,
    pub goals_eaten: u64,
}

impl From<&RunRecord> for RunRow {
    fn from(r: &RunRecord) -> Self {
        RunRow {
            run:         r.run as u64,
            seed:        r.seed,
            outcome:     r.outcome.label(),
            decisions:   r.decisions,
            goals_eaten: r.goals_eaten as u64,
        }
    }
}
