//! Error types surfaced by the simulation API.

use thiserror::Error;

/// Fatal problems found while loading a level. The level is not loaded.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("spawn descriptor #{index} ({kind:?}) is invalid: {reason}")]
    InvalidSpawnDescriptor {
        index: usize,
        kind: String,
        reason: String,
    },
    #[error("level has no player spawn")]
    MissingPlayer,
    #[error("level has more than one player spawn (second at descriptor #{index})")]
    DuplicatePlayer { index: usize },
    #[error("map size {width}x{height} is not positive and finite")]
    InvalidMapSize { width: f32, height: f32 },
    #[error("obstacle #{index} is not a finite rectangle with positive size")]
    InvalidObstacle { index: usize },
    #[error("tuning rejected: {0}")]
    InvalidTuning(String),
}

/// A step was rejected before touching any state.
#[derive(Debug, Error, PartialEq)]
pub enum StepError {
    #[error("time delta {0} is negative or not finite")]
    InvalidDelta(f32),
    #[error("input intent contains non-finite values")]
    InvalidIntent,
}

/// Problems reading or validating tuning overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
