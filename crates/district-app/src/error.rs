use thiserror::Error;

use district_sim::SimError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to start game loop: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("simulation not started")]
    NotStarted,

    #[error("simulation already running")]
    AlreadyRunning,

    #[error("game loop unavailable: {0}")]
    Channel(String),

    #[error("game loop thread panicked")]
    LoopPanicked,
}
