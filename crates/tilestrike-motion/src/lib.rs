//! Motion algorithms for TILESTRIKE.
//!
//! Axis-separated collision resolution against static geometry and the
//! pursuit/avoidance steering used by mobs. Pure functions over plain
//! data, no ECS dependency.

pub mod collision;
pub mod steering;

pub use tilestrike_core as core;
