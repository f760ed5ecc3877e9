//! Core types and definitions for the TILESTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, input commands, level descriptions, snapshots,
//! events, tuning and errors. It has no dependency on the ECS or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod level;
pub mod state;
pub mod tuning;
pub mod types;
