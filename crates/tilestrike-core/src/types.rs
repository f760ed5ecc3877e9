//! Fundamental geometric and simulation types.
//!
//! World space is screen-like: +x right, +y down, origin at the map's
//! top-left corner. Angles are in degrees, counter-clockwise as seen on
//! screen, so a facing of 0 points along +x and 90 points up (-y).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::CONTACT_EPSILON;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size() / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the rectangle so its center sits on `center`, keeping its size.
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Copy of this rectangle shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// True when the rectangles penetrate each other on both axes.
    ///
    /// Shared edges (and penetration below `CONTACT_EPSILON`) do not count,
    /// so a body pushed flush against a wall is not considered overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() - other.left() > CONTACT_EPSILON
            && other.right() - self.left() > CONTACT_EPSILON
            && self.bottom() - other.top() > CONTACT_EPSILON
            && other.bottom() - self.top() > CONTACT_EPSILON
    }

    /// True when `point` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Stable, serializable handle to a simulation entity.
///
/// Wraps the generational bits of the ECS handle so views and events can
/// refer to entities without depending on the ECS crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of steps applied so far.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one step of `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        self.tick += 1;
        self.elapsed_ms += dt_secs as f64 * 1000.0;
    }

    /// Milliseconds elapsed since `earlier_ms`.
    pub fn since(&self, earlier_ms: f64) -> f64 {
        self.elapsed_ms - earlier_ms
    }
}

/// Rotate `v` counter-clockwise (in math orientation) by `degrees`.
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit vector for a facing angle in degrees.
pub fn facing_vector(degrees: f32) -> Vec2 {
    rotate_deg(Vec2::X, -degrees)
}

/// Facing angle (degrees, [0, 360)) that points along `v`.
///
/// Inverse of [`facing_vector`]. A zero vector maps to 0.
pub fn facing_of(v: Vec2) -> f32 {
    if v == Vec2::ZERO {
        return 0.0;
    }
    wrap_degrees((-v.y).atan2(v.x).to_degrees())
}

/// Wrap an angle into [0, 360).
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sine ease-in-out on `t` in [0, 1].
pub fn ease_in_out_sine(t: f32) -> f32 {
    -0.5 * ((std::f32::consts::PI * t).cos() - 1.0)
}
