//! `gc-sim`: decision loop orchestrator for grid-chase.
//!
//! # Decision tick
//!
//! ```text
//! ① Snapshot     GraphSnapshot::build(grid, pursuer tiles, threat params)
//! ② Goal-seeker  plan (GoalSeeking) and move; capture check
//! ③ Pursuers     per pursuer: roll timer, wander or plan (Pursuit), move,
//!                count down; capture check
//! ④ Consume      goal under the goal-seeker is cleared (no capture only)
//! ⑤ Exhaustion   no goals left → eater wins
//! ```
//!
//! # Loops
//!
//! | Entry point          | Pacing                                            |
//! |----------------------|---------------------------------------------------|
//! | [`Sim::run`]         | headless, ticks back to back                      |
//! | [`Sim::run_paced`]   | frames at `frame_rate_hz`, ticks every `move_delay_ms` |
//! | [`run_batch`]        | many headless runs on a rayon pool                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gc_core::GameConfig;
//! use gc_sim::{NoopObserver, SimBuilder};
//!
//! let config = GameConfig::load(Path::new("conf/conf.yaml"))?;
//! let mut sim = SimBuilder::new(&config).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! println!("{outcome} wins after {} decisions", sim.tick.0);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use batch::{run_batch, run_batch_on, BatchReport, RunFailure, RunRecord};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimView};
pub use sim::{Outcome, Sim, CHASER, EATER};
