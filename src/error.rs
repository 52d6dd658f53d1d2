//! Error types for the simulator.

use thiserror::Error;

/// Errors raised while configuring or running a simulation batch.
#[derive(Debug, Error)]
pub enum SimError {
    /// A batch needs at least one game.
    #[error("number of runs must be at least 1 (got {0})")]
    InvalidRuns(u64),

    /// A game needs at least one die.
    #[error("number of dice must be at least 1 (got {0})")]
    InvalidDice(u32),

    /// Scripted rolls must be real die faces.
    #[error("die face must be between 1 and 6 (got {0})")]
    InvalidFace(u8),

    /// Scripted dice need at least one face to replay.
    #[error("scripted dice need at least one face")]
    EmptyScript,

    /// Writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
