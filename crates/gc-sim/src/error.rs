use thiserror::Error;

use gc_agent::AgentError;
use gc_core::{CoreError, Coord};
use gc_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("layout error: {0}")]
    Grid(#[from] GridError),

    #[error("agent setup error: {0}")]
    Agent(#[from] AgentError),

    #[error("{got} pursuer positions given for {expected} pursuers")]
    PositionCountMismatch { expected: usize, got: usize },

    #[error("spawn position {0} is not a walkable tile")]
    UnwalkableSpawn(Coord),

    #[error("no outcome after {ticks} decision ticks")]
    TickLimit { ticks: u64 },

    #[error("simulation instance panicked: {0}")]
    InstancePanicked(String),
}

pub type SimResult<T> = Result<T, SimError>;
