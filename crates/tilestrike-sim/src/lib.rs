//! Simulation engine for TILESTRIKE.
//!
//! Owns the hecs ECS world, advances it one step at a time from sampled
//! player input, and produces `FrameSnapshot`s plus an ordered event list
//! for renderers and audio.

pub mod camera;
pub mod commit;
pub mod engine;
pub mod handles;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationState};
pub use tilestrike_core as core;
pub use world_setup::load_level;

#[cfg(test)]
mod tests;
