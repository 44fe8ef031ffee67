use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("the grid has no walkable tile to spawn an agent on")]
    NoWalkableTiles,

    #[error("pursuer state ticks must satisfy 1 <= min <= max, got {min}..={max}")]
    InvalidStateRange { min: u32, max: u32 },
}

pub type AgentResult<T> = Result<T, AgentError>;
