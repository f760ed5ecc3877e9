//! Axis-separated rectangle collision against a static obstacle set.
//!
//! A body is moved along x, resolved, then moved along y and resolved.
//! Resolving one axis at a time lets a body slide along walls and keeps
//! corners from being cut diagonally.

use glam::Vec2;

use tilestrike_core::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The moving part of an entity as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Hit box; kept centered on `position`.
    pub hit_box: Rect,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, hit_size: Vec2) -> Self {
        Self {
            position,
            velocity,
            hit_box: Rect::from_center(position, hit_size),
        }
    }

    /// Re-center the hit box on the current position.
    pub fn sync(&mut self) {
        self.hit_box.set_center(self.position);
    }
}

/// Which axes were blocked during a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub x: bool,
    pub y: bool,
}

/// Push `body` out of the obstacles it overlaps along `axis`.
///
/// The body is pushed to the near boundary of the first overlapping
/// obstacle, on the side given by comparing centers, and its velocity on
/// that axis is zeroed. The lookup repeats so a push into a neighbouring
/// obstacle is resolved in the same call; it is bounded by the obstacle
/// count. Returns true when any obstacle was hit.
pub fn resolve_axis(body: &mut Body, obstacles: &[Rect], axis: Axis) -> bool {
    let mut collided = false;

    for _ in 0..obstacles.len() {
        let Some(wall) = obstacles.iter().find(|wall| body.hit_box.overlaps(wall)) else {
            break;
        };
        collided = true;

        let half = body.hit_box.half_extents();
        let wall_center = wall.center();
        match axis {
            Axis::X => {
                body.position.x = if wall_center.x >= body.position.x {
                    wall.left() - half.x
                } else {
                    wall.right() + half.x
                };
                body.velocity.x = 0.0;
            }
            Axis::Y => {
                body.position.y = if wall_center.y >= body.position.y {
                    wall.top() - half.y
                } else {
                    wall.bottom() + half.y
                };
                body.velocity.y = 0.0;
            }
        }
        body.sync();
    }

    collided
}

/// Move `body` by `delta`, resolving x then y against `obstacles`.
pub fn move_and_collide(body: &mut Body, delta: Vec2, obstacles: &[Rect]) -> Blocked {
    body.position.x += delta.x;
    body.sync();
    let x = resolve_axis(body, obstacles, Axis::X);

    body.position.y += delta.y;
    body.sync();
    let y = resolve_axis(body, obstacles, Axis::Y);

    Blocked { x, y }
}

/// True when `rect` overlaps any obstacle.
pub fn overlaps_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|wall| rect.overlaps(wall))
}
