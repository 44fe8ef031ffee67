//! Core error type.
//!
//! Only configuration loading can fail in this crate.  Every failure here is
//! fatal at startup: it is surfaced before any simulation is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `gc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
