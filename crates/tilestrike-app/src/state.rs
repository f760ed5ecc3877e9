//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use tilestrike_core::commands::InputIntent;
use tilestrike_core::enums::RunState;
use tilestrike_core::state::FrameSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// Input to apply from the next step on. The latest one wins.
    Intent(InputIntent),
    Pause(bool),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest frame published by the loop, for polling from other threads.
pub type SharedFrame = Arc<Mutex<Option<FrameSnapshot>>>;

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub run_state: RunState,
    pub steps: u64,
    pub kills: u32,
    pub shots: u32,
    pub health: i32,
}

impl Outcome {
    pub fn new() -> Self {
        Self {
            run_state: RunState::Running,
            steps: 0,
            kills: 0,
            shots: 0,
            health: 0,
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::new()
    }
}
