//! Headless host for the TILESTRIKE simulation.
//!
//! Loads a level and tuning from disk, drives the player with a simple
//! autopilot and reports the outcome. A real-time loop thread is available
//! for hosts that want wall-clock pacing.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;
