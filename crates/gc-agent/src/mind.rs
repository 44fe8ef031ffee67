//! The pursuer's two-state timer machine.
//!
//! # Decision order
//!
//! Every decision tick a pursuer calls, in order:
//!
//! 1. [`ChaserMind::roll`]: if the timer has run out, switch to the other
//!    mode and draw a fresh duration from `[min_ticks, max_ticks]`.
//! 2. acts in [`ChaserMind::mode`].
//! 3. [`ChaserMind::tick_down`].
//!
//! A mode entered with duration `r` is therefore acted in for exactly `r`
//! decisions.  With only two modes a switch is always a toggle, so modes
//! strictly alternate.

use std::fmt;

use gc_core::AgentRng;

use crate::{AgentError, AgentResult};

/// What a pursuer is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChaserMode {
    /// Random walk over walkable neighbours.
    Wander,
    /// Direct, danger-blind route to the goal-seeker.
    Pursue,
}

impl ChaserMode {
    /// The mode a switch leads to.
    pub fn other(self) -> ChaserMode {
        match self {
            ChaserMode::Wander => ChaserMode::Pursue,
            ChaserMode::Pursue => ChaserMode::Wander,
        }
    }

    /// Short label for status rows and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            ChaserMode::Wander => "wander",
            ChaserMode::Pursue => "pursue",
        }
    }
}

impl fmt::Display for ChaserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mode plus the countdown until the next forced switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChaserMind {
    pub(crate) mode:      ChaserMode,
    pub(crate) remaining: u32,
    pub(crate) min_ticks: u32,
    pub(crate) max_ticks: u32,
}

impl ChaserMind {
    /// A mind starting in [`ChaserMode::Wander`] with a freshly drawn timer.
    pub fn new(min_ticks: u32, max_ticks: u32, rng: &mut AgentRng) -> AgentResult<Self> {
        if min_ticks == 0 || min_ticks > max_ticks {
            return Err(AgentError::InvalidStateRange { min: min_ticks, max: max_ticks });
        }
        Ok(Self {
            mode:      ChaserMode::Wander,
            remaining: rng.gen_range(min_ticks..=max_ticks),
            min_ticks,
            max_ticks,
        })
    }

    pub fn mode(&self) -> ChaserMode {
        self.mode
    }

    /// Decisions left before the next switch.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Switch modes if the timer has expired.  Returns the new mode on a
    /// switch, `None` otherwise.
    pub fn roll(&mut self, rng: &mut AgentRng) -> Option<ChaserMode> {
        if self.remaining > 0 {
            return None;
        }
        self.mode = self.mode.other();
        self.remaining = rng.gen_range(self.min_ticks..=self.max_ticks);
        Some(self.mode)
    }

    #[inline]
    pub fn tick_down(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
