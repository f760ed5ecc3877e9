//! Run configuration from command-line arguments and environment.
//!
//! Usage: `tilestrike [LEVEL.json] [--tuning FILE.toml] [--seed N]
//! [--steps N] [--realtime]`. `TILESTRIKE_SEED` and `TILESTRIKE_MAX_STEPS`
//! provide defaults for the matching flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tilestrike_core::level::LevelData;
use tilestrike_core::tuning::Tuning;

use crate::error::AppError;

pub const DEFAULT_LEVEL: &str = "demos/level.json";
pub const DEFAULT_MAX_STEPS: u64 = 60 * 120;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub level_path: PathBuf,
    pub tuning_path: Option<PathBuf>,
    pub seed: u64,
    pub max_steps: u64,
    /// Pace steps to the wall clock instead of running flat out.
    pub realtime: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            level_path: PathBuf::from(DEFAULT_LEVEL),
            tuning_path: None,
            seed: 42,
            max_steps: DEFAULT_MAX_STEPS,
            realtime: false,
        }
    }
}

impl RunConfig {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(seed) = env::var("TILESTRIKE_SEED") {
            config.seed = parse_number("TILESTRIKE_SEED", &seed)?;
        }
        if let Ok(steps) = env::var("TILESTRIKE_MAX_STEPS") {
            config.max_steps = parse_number("TILESTRIKE_MAX_STEPS", &steps)?;
        }
        config.apply_args(env::args().skip(1))
    }

    /// Apply command-line arguments on top of `self`.
    pub fn apply_args(mut self, args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tuning" => self.tuning_path = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--seed" => self.seed = parse_number(&arg, &value_for(&arg, args.next())?)?,
                "--steps" => self.max_steps = parse_number(&arg, &value_for(&arg, args.next())?)?,
                "--realtime" => self.realtime = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Args(format!("unknown flag {flag}")));
                }
                _ => self.level_path = PathBuf::from(&arg),
            }
        }
        Ok(self)
    }

    pub fn load_level(&self) -> Result<LevelData, AppError> {
        read_level(&self.level_path)
    }

    /// Tuning overrides if a file was given, defaults otherwise.
    pub fn load_tuning(&self) -> Result<Tuning, AppError> {
        match &self.tuning_path {
            Some(path) => Ok(Tuning::from_toml_str(&read(path)?)?),
            None => Ok(Tuning::default()),
        }
    }
}

pub fn read_level(path: &Path) -> Result<LevelData, AppError> {
    serde_json::from_str(&read(path)?).map_err(|source| AppError::LevelJson {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Args(format!("{flag} needs a value")))
}

fn parse_number(name: &str, raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Args(format!("{name} expects a number, got {raw:?}")))
}
