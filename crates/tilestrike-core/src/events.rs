//! Events emitted by the simulation for audio and VFX feedback.
//!
//! Events are listed in the order they were raised within a step, so a
//! `WeaponFired` always precedes the `MobHit` it causes, and a `MobHit`
//! precedes the `MobDied` it triggers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemKind, WeaponId};
use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The player pulled the trigger.
    WeaponFired {
        weapon: WeaponId,
        bullets: u32,
        muzzle: Vec2,
    },
    /// A bullet struck a mob.
    MobHit {
        mob: EntityId,
        damage: i32,
        remaining: i32,
    },
    /// A mob's health ran out. `position` is where a splat decal belongs.
    MobDied { mob: EntityId, position: Vec2 },
    /// A mob touched the player.
    PlayerHit {
        by: EntityId,
        damage: i32,
        remaining: i32,
    },
    PlayerDied { position: Vec2 },
    ItemPickedUp { kind: ItemKind, position: Vec2 },
    /// A pursuing mob made noise.
    MobGrowl { mob: EntityId },
    /// The last mob died.
    LevelCleared,
}
