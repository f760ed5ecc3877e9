//! Camera: world-to-screen offset that follows a target and never shows
//! area outside the map.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use tilestrike_core::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Added to world coordinates to get screen coordinates. Always <= 0.
    offset: Vec2,
    map_size: Vec2,
    viewport: Vec2,
}

impl Camera {
    pub fn new(map_size: Vec2, viewport: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            map_size,
            viewport,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Center the view on `target`, clamped to the map edges.
    ///
    /// On an axis where the map is smaller than the viewport the offset
    /// stays at 0.
    pub fn update(&mut self, target: Vec2) {
        let desired = self.viewport / 2.0 - target;
        let min = (self.viewport - self.map_size).min(Vec2::ZERO);
        self.offset = desired.clamp(min, Vec2::ZERO);
    }

    /// World rectangle to screen rectangle.
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(self.offset)
    }

    pub fn apply_point(&self, point: Vec2) -> Vec2 {
        point + self.offset
    }

    /// Screen point back to world space.
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }

    /// World-space rectangle currently visible on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(-self.offset.x, -self.offset.y, self.viewport.x, self.viewport.y)
    }
}
