//! Error type shared by the library
//!
//! Arithmetic degeneracies (zero distance, zero velocity, runaway speeds) are
//! corrected in place by the engine and never surface here. Only
//! configuration mistakes and I/O failures do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown scenario id {0} (expected 1-6)")]
    InvalidScenario(u8),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Chamber particles were already created")]
    AlreadySeeded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SimResult<T> = Result<T, SimError>;
