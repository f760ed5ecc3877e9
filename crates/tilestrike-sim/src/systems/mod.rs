//! ECS systems, run by `SimulationState::step` in a fixed order.

pub mod cleanup;
pub mod effects;
pub mod interactions;
pub mod mobs;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod weapons;

use tilestrike_core::components::{HitBox, Position, Velocity};
use tilestrike_motion::collision::Body;

/// Gather the components the collision resolver works on.
pub(crate) fn load_body(pos: &Position, vel: &Velocity, hit: &HitBox) -> Body {
    Body {
        position: pos.0,
        velocity: vel.0,
        hit_box: hit.0,
    }
}

/// Write a resolved body back into its components.
pub(crate) fn store_body(body: &Body, pos: &mut Position, vel: &mut Velocity, hit: &mut HitBox) {
    pos.0 = body.position;
    vel.0 = body.velocity;
    hit.0 = body.hit_box;
}
