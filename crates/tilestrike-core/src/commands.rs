//! Player input handed to the simulation each step.
//!
//! Input devices are polled by the caller; the simulation only sees the
//! sampled intent.

use serde::{Deserialize, Serialize};

/// Sampled control intent for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    /// Turn input in [-1, 1]. Positive turns counter-clockwise on screen.
    pub turn: f32,
    /// Throttle in [-1, 1]. Positive drives forward, negative reverses at half speed.
    pub throttle: f32,
    /// Trigger held.
    pub fire: bool,
}

impl InputIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn firing() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.turn.is_finite() && self.throttle.is_finite()
    }

    /// Copy with both axes clamped to [-1, 1].
    pub fn clamped(&self) -> Self {
        Self {
            turn: self.turn.clamp(-1.0, 1.0),
            throttle: self.throttle.clamp(-1.0, 1.0),
            fire: self.fire,
        }
    }
}
