//! Projectile system: bullets fly straight and die on walls or off-map.

use hecs::World;

use tilestrike_core::components::{Bullet, HitBox, Position, Velocity};
use tilestrike_core::types::Rect;
use tilestrike_motion::collision::overlaps_any;

use crate::commit::CommitBuffer;

/// Move every bullet by `velocity * dt` and retire those that touch a wall
/// or leave `bounds`.
pub fn run(
    world: &mut World,
    dt: f32,
    obstacles: &[Rect],
    bounds: &Rect,
    commit: &mut CommitBuffer,
) {
    for (entity, (_bullet, pos, vel, hit)) in
        world.query_mut::<(&Bullet, &mut Position, &Velocity, &mut HitBox)>()
    {
        pos.0 += vel.0 * dt;
        hit.0.set_center(pos.0);

        if overlaps_any(&hit.0, obstacles) || !bounds.contains(pos.0) {
            commit.retire(entity);
        }
    }
}
