//! Frame snapshot: the complete renderable state produced after each step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{EntityId, Rect, SimTime};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub run_state: RunState,
    pub paused: bool,
    /// Translation from world to screen space.
    pub camera_offset: Vec2,
    pub map_size: Vec2,
    pub player: PlayerView,
    pub mobs: Vec<MobView>,
    pub bullets: Vec<BodyView>,
    pub items: Vec<BodyView>,
    pub effects: Vec<BodyView>,
    /// Count of mobs still alive (HUD counter).
    pub live_mobs: u32,
}

/// Player state for rendering and the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: Option<EntityId>,
    pub position: Vec2,
    pub rotation: f32,
    pub health: i32,
    pub max_health: i32,
    pub weapon: WeaponId,
    pub hit_box: Rect,
    /// Active cosmetic tint and its current alpha.
    pub tint: Option<TintView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintView {
    pub kind: TintKind,
    pub alpha: u8,
}

/// A hostile on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobView {
    pub id: EntityId,
    pub position: Vec2,
    pub rotation: f32,
    pub health: i32,
    pub max_health: i32,
    pub hit_box: Rect,
}

/// Any other drawable: bullet, item or effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: EntityId,
    pub sprite: SpriteKey,
    /// Where to draw the sprite center. For items this includes the bob offset.
    pub position: Vec2,
    pub rotation: f32,
    pub size: Vec2,
    pub hit_box: Rect,
}

/// Result of one call to `step`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub snapshot: FrameSnapshot,
    pub terminal: RunState,
    pub events: Vec<SimEvent>,
}

impl PlayerView {
    /// Health as a fraction of max, for the HUD bar.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }
}
