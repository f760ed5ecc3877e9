//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Rect};

/// World-space center of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Collision rectangle, always centered on the entity's Position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HitBox(pub Rect);

/// Facing angle in degrees, [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing(pub f32);

/// What the renderer draws and the size of the unrotated sprite.
/// Independent of the hit box so art can overhang.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub key: SpriteKey,
    pub size: Vec2,
}

/// Hit points, clamped to [0, max].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Countdown through the tint alpha ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintTimer {
    pub kind: TintKind,
    /// Index of the next alpha value to show.
    pub frame: usize,
}

/// The player-controlled shooter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub weapon: WeaponId,
    /// Sim time of the last trigger pull, `None` before the first shot.
    pub last_shot_ms: Option<f64>,
    /// Current turn rate from input (degrees/s).
    pub rot_speed: f32,
    pub damage_tint: Option<TintTimer>,
    pub heal_tint: Option<TintTimer>,
}

/// A hostile that chases the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mob {
    /// Pursuit speed picked at spawn.
    pub speed: f32,
    /// Acceleration applied in the last step.
    pub acceleration: Vec2,
    /// Handle of the entity being chased. Looked up, never owned.
    pub target: EntityId,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub weapon: WeaponId,
    pub damage: i32,
    pub spawned_ms: f64,
    pub lifetime_ms: f64,
}

/// A pickup resting on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Bob phase, grows by BOB_SPEED per step up to BOB_RANGE.
    pub bob_step: f32,
    /// Bob direction, +1 or -1.
    pub bob_dir: f32,
}

/// Short-lived flash at the gun barrel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuzzleFlash {
    pub spawned_ms: f64,
    pub duration_ms: f64,
}
