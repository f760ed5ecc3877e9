//! Pursuit steering with local avoidance.
//!
//! Mobs head for their target once it is inside the detection radius,
//! push away from neighbours inside the avoidance radius, and damp their
//! own velocity so they settle at their commanded speed instead of
//! accelerating without bound.

use glam::Vec2;

use tilestrike_core::types::facing_of;

/// Radii that shape steering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    pub detect_radius: f32,
    pub avoid_radius: f32,
}

/// Input for one mob.
pub struct SteeringContext<'a> {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
    /// Target position, `None` when the target reference is no longer valid.
    pub target: Option<Vec2>,
    /// Positions of all mobs, this one included. Entries at distance 0 are ignored.
    pub neighbours: &'a [Vec2],
    pub params: SteeringParams,
}

/// Steering decision for one mob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    pub acceleration: Vec2,
    /// Facing toward the target, set only while pursuing.
    pub facing: Option<f32>,
    pub pursuing: bool,
}

impl SteeringOutput {
    pub fn idle() -> Self {
        Self {
            acceleration: Vec2::ZERO,
            facing: None,
            pursuing: false,
        }
    }
}

/// Compute the steering acceleration for one mob.
pub fn steer(ctx: &SteeringContext) -> SteeringOutput {
    let Some(target) = ctx.target else {
        return SteeringOutput::idle();
    };

    let to_target = target - ctx.position;
    let detect_sq = ctx.params.detect_radius * ctx.params.detect_radius;
    if to_target.length_squared() >= detect_sq {
        return SteeringOutput::idle();
    }

    let mut acceleration = to_target.normalize_or_zero();
    acceleration += separation(ctx.position, ctx.neighbours, ctx.params.avoid_radius);
    acceleration = acceleration.normalize_or_zero() * ctx.speed;
    acceleration -= ctx.velocity;

    SteeringOutput {
        acceleration,
        facing: Some(facing_of(to_target)),
        pursuing: true,
    }
}

/// Sum of unit vectors pointing away from every neighbour closer than `radius`.
pub fn separation(position: Vec2, neighbours: &[Vec2], radius: f32) -> Vec2 {
    let radius_sq = radius * radius;
    neighbours
        .iter()
        .map(|other| position - *other)
        .filter(|away| {
            let dist_sq = away.length_squared();
            dist_sq > 0.0 && dist_sq < radius_sq
        })
        .map(|away| away.normalize_or_zero())
        .sum()
}

/// Integrate one step. Returns `(new_velocity, displacement)`.
///
/// `vel += acc·dt`, then `displacement = vel·dt + ½·acc·dt²`.
pub fn integrate(velocity: Vec2, acceleration: Vec2, dt: f32) -> (Vec2, Vec2) {
    let new_velocity = velocity + acceleration * dt;
    let displacement = new_velocity * dt + 0.5 * acceleration * dt * dt;
    (new_velocity, displacement)
}
