use std::path::PathBuf;

use thiserror::Error;

use tilestrike_core::error::{ConfigError, LevelError, StepError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("level file {} is not valid JSON: {source}", path.display())]
    LevelJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Tuning(#[from] ConfigError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Step(#[from] StepError),
    #[error("bad argument: {0}")]
    Args(String),
    #[error("failed to start the game loop thread: {0}")]
    Thread(std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}
