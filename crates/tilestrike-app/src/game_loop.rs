//! Game loops: a flat-out headless runner and a real-time thread that
//! steps the simulation at the tick rate.
//!
//! The real-time simulation is created inside its thread because it's
//! cleaner for ownership. Intents arrive via `mpsc` channel; frames are
//! stored in shared state for polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use tilestrike_core::commands::InputIntent;
use tilestrike_core::constants::{DT, TICK_RATE};
use tilestrike_core::error::StepError;
use tilestrike_core::events::SimEvent;
use tilestrike_core::level::LevelData;
use tilestrike_core::state::{FrameSnapshot, StepResult};
use tilestrike_sim::{load_level, SimConfig, SimulationState};

use crate::error::AppError;
use crate::state::{LoopCommand, Outcome, SharedFrame};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Fold one step into the running tally and log its events.
pub fn record(outcome: &mut Outcome, result: &StepResult) {
    outcome.steps += 1;
    outcome.run_state = result.terminal;
    outcome.health = result.snapshot.player.health;

    for event in &result.events {
        match event {
            SimEvent::WeaponFired { weapon, bullets, .. } => {
                outcome.shots += 1;
                debug!(weapon = weapon.name(), bullets, "fired");
            }
            SimEvent::MobDied { mob, .. } => {
                outcome.kills += 1;
                debug!(mob = mob.0, "kill");
            }
            SimEvent::PlayerHit { remaining, .. } => debug!(remaining, "player hit"),
            SimEvent::ItemPickedUp { kind, .. } => debug!(?kind, "pickup"),
            _ => {}
        }
    }
}

/// Step as fast as possible until the run ends or `max_steps` pass.
pub fn run_headless(
    sim: &mut SimulationState,
    max_steps: u64,
    mut pilot: impl FnMut(&FrameSnapshot) -> InputIntent,
) -> Result<Outcome, StepError> {
    let mut outcome = Outcome::new();
    let mut frame = sim.snapshot();

    while outcome.steps < max_steps {
        let result = sim.step(DT, pilot(&frame))?;
        record(&mut outcome, &result);
        if result.terminal.is_terminal() {
            break;
        }
        frame = result.snapshot;
    }

    info!(
        state = ?outcome.run_state,
        steps = outcome.steps,
        kills = outcome.kills,
        shots = outcome.shots,
        health = outcome.health,
        "headless run finished"
    );
    Ok(outcome)
}

/// Spawns the real-time game loop in a new thread.
///
/// Returns the command sender and a handle yielding the outcome.
pub fn spawn_game_loop(
    level: LevelData,
    config: SimConfig,
    latest_frame: SharedFrame,
    max_steps: u64,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<Result<Outcome, AppError>>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tilestrike-game-loop".into())
        .spawn(move || -> Result<Outcome, AppError> {
            let mut sim = load_level(&level, config)?;
            Ok(run_game_loop(&mut sim, cmd_rx, &latest_frame, max_steps))
        })
        .map_err(AppError::Thread)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the run ends, Shutdown, or channel disconnect.
fn run_game_loop(
    sim: &mut SimulationState,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_frame: &SharedFrame,
    max_steps: u64,
) -> Outcome {
    let mut outcome = Outcome::new();
    let mut intent = InputIntent::idle();
    let mut next_tick_time = Instant::now();

    while outcome.steps < max_steps {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Intent(next)) => intent = next,
                Ok(LoopCommand::Pause(paused)) => sim.set_paused(paused),
                Ok(LoopCommand::Shutdown) => return outcome,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return outcome,
            }
        }

        // 2. Advance one step (the sim handles pause internally)
        match sim.step(DT, intent) {
            Ok(result) => {
                record(&mut outcome, &result);
                let done = result.terminal.is_terminal();
                if let Ok(mut lock) = latest_frame.lock() {
                    *lock = Some(result.snapshot);
                }
                if done {
                    info!(state = ?outcome.run_state, steps = outcome.steps, "run over");
                    return outcome;
                }
            }
            Err(err) => warn!(%err, "step rejected"),
        }

        // 3. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    }
    outcome
}
