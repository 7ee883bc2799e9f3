//! Errors raised while configuring a session.
//!
//! Gameplay never fails: invalid actions during a tick are silent no-ops.
//! Only building an engine from a config or scenario can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config document: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("objective {objective} references unknown checkpoint {checkpoint}")]
    UnknownCheckpoint { objective: usize, checkpoint: usize },
}
