//! Simulation engine, the core of the game.
//!
//! `SimulationState` owns the hecs ECS world, applies one step of player
//! input at a time, runs all systems, and produces `FrameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use tilestrike_core::commands::InputIntent;
use tilestrike_core::components::{Health, Mob, Position};
use tilestrike_core::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use tilestrike_core::enums::RunState;
use tilestrike_core::error::StepError;
use tilestrike_core::events::SimEvent;
use tilestrike_core::state::{FrameSnapshot, StepResult};
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{Rect, SimTime};

use crate::camera::Camera;
use crate::commit::CommitBuffer;
use crate::systems;
use crate::systems::snapshot::FrameContext;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
    /// Screen size in world units, used by the camera.
    pub viewport: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

/// The simulation. Owns the ECS world and all sim state.
pub struct SimulationState {
    world: World,
    player: Entity,
    obstacles: Vec<Rect>,
    bounds: Rect,
    time: SimTime,
    run_state: RunState,
    paused: bool,
    rng: ChaCha8Rng,
    tuning: Tuning,
    camera: Camera,
    commit: CommitBuffer,
    events: Vec<SimEvent>,
}

impl SimulationState {
    /// Assemble a simulation around an already populated world.
    pub(crate) fn from_world(
        world: World,
        player: Entity,
        obstacles: Vec<Rect>,
        bounds: Rect,
        rng: ChaCha8Rng,
        tuning: Tuning,
        viewport: Vec2,
    ) -> Self {
        let mut state = Self {
            world,
            player,
            obstacles,
            bounds,
            time: SimTime::default(),
            run_state: RunState::Running,
            paused: false,
            rng,
            tuning,
            camera: Camera::new(bounds.size(), viewport),
            commit: CommitBuffer::new(),
            events: Vec::new(),
        };
        state.follow_player();
        state
    }

    /// Advance the simulation by `dt_secs` and return the resulting frame.
    ///
    /// Input is checked before anything changes; a rejected step leaves
    /// the state exactly as it was. After the run ends, or while paused,
    /// the current frame is returned unchanged and without events.
    pub fn step(&mut self, dt_secs: f32, intent: InputIntent) -> Result<StepResult, StepError> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(StepError::InvalidDelta(dt_secs));
        }
        if !intent.is_finite() {
            return Err(StepError::InvalidIntent);
        }

        if self.run_state.is_terminal() || self.paused {
            return Ok(self.result(Vec::new()));
        }

        let dt = if dt_secs > self.tuning.max_step_secs {
            warn!(
                dt = dt_secs,
                max = self.tuning.max_step_secs,
                "step delta clamped"
            );
            self.tuning.max_step_secs
        } else {
            dt_secs
        };
        let intent = intent.clamped();

        self.time.advance(dt);
        self.run_systems(dt, intent);
        self.update_run_state();
        self.follow_player();

        let events = std::mem::take(&mut self.events);
        Ok(self.result(events))
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, intent: InputIntent) {
        let now = self.time.elapsed_ms;

        // Player: intent, trigger, movement.
        systems::player::apply_intent(&mut self.world, self.player, intent, &self.tuning);
        if intent.fire {
            if let Some(fired) = systems::weapons::try_fire(
                &mut self.world,
                self.player,
                now,
                &self.tuning,
                &mut self.rng,
                &mut self.commit,
            ) {
                self.events.push(fired);
            }
        }
        systems::player::advance(&mut self.world, self.player, dt, &self.obstacles);

        // Mobs and projectiles.
        systems::mobs::run(
            &mut self.world,
            dt,
            &self.obstacles,
            &self.tuning,
            &mut self.rng,
            &mut self.events,
        );
        systems::projectiles::run(
            &mut self.world,
            dt,
            &self.obstacles,
            &self.bounds,
            &mut self.commit,
        );
        systems::effects::run(&mut self.world, &self.tuning);

        // Overlaps between groups, then commit.
        systems::interactions::run(
            &mut self.world,
            self.player,
            &self.obstacles,
            &self.tuning,
            &mut self.commit,
            &mut self.events,
        );
        systems::cleanup::run(&mut self.world, now, &mut self.commit);
    }

    /// Check for the end of the run. Defeat wins over a simultaneous clear.
    fn update_run_state(&mut self) {
        let player_alive = self
            .world
            .get::<&Health>(self.player)
            .map(|h| h.current > 0)
            .unwrap_or(false);

        if !player_alive {
            self.run_state = RunState::Defeated;
            info!(tick = self.time.tick, "run ended: defeated");
        } else if self.live_mobs() == 0 {
            self.run_state = RunState::Cleared;
            self.events.push(SimEvent::LevelCleared);
            info!(tick = self.time.tick, "run ended: level cleared");
        }
    }

    fn follow_player(&mut self) {
        if let Ok(pos) = self.world.get::<&Position>(self.player) {
            self.camera.update(pos.0);
        }
    }

    fn result(&self, events: Vec<SimEvent>) -> StepResult {
        StepResult {
            snapshot: self.snapshot(),
            terminal: self.run_state,
            events,
        }
    }

    /// Build the current frame without stepping.
    pub fn snapshot(&self) -> FrameSnapshot {
        let ctx = FrameContext {
            time: self.time,
            run_state: self.run_state,
            paused: self.paused,
            camera: &self.camera,
            map_size: self.bounds.size(),
            player: self.player,
            tuning: &self.tuning,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx)
    }

    /// Freeze or resume the simulation. A paused step advances nothing.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, "pause toggled");
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Handle of the player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Number of mobs with health left.
    pub fn live_mobs(&self) -> usize {
        self.world
            .query::<(&Mob, &Health)>()
            .iter()
            .filter(|(_, (_, health))| health.current > 0)
            .count()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a bullet directly into the world (for testing).
    #[cfg(test)]
    pub fn spawn_test_bullet(
        &mut self,
        at: Vec2,
        velocity: Vec2,
        weapon: tilestrike_core::enums::WeaponId,
    ) -> Entity {
        let spec = *self.tuning.weapons.spec(weapon);
        let now = self.time.elapsed_ms;
        self.world.spawn(crate::world_setup::bullet_bundle(
            at, velocity, weapon, &spec, now,
        ))
    }
}
