//! Decoded level description consumed by `load_level`.
//!
//! Produced by an external map decoder. Object positions follow the editor
//! convention: `(x, y)` is the object's top-left corner and entities spawn
//! at the center of the object's box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// One placed map object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnDescriptor {
    /// Object name from the map, e.g. `"player"`, `"zombie"`, `"health"`.
    pub kind: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl SpawnDescriptor {
    pub fn new(kind: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            kind: kind.into(),
            x,
            y,
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Center of the object's box, which is the entity spawn point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.width.unwrap_or(0.0) / 2.0,
            self.y + self.height.unwrap_or(0.0) / 2.0,
        )
    }
}

/// A complete decoded level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Map extent in world units.
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub spawns: Vec<SpawnDescriptor>,
    /// Solid rectangles from the collision layer.
    #[serde(default)]
    pub obstacles: Vec<Rect>,
}

impl LevelData {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn spawn(mut self, descriptor: SpawnDescriptor) -> Self {
        self.spawns.push(descriptor);
        self
    }

    pub fn obstacle(mut self, rect: Rect) -> Self {
        self.obstacles.push(rect);
        self
    }
}
