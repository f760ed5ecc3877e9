//! Player system: turns the sampled intent into a turn rate and velocity,
//! then moves the player through the obstacle set.

use hecs::{Entity, World};

use tilestrike_core::commands::InputIntent;
use tilestrike_core::components::{Facing, HitBox, Player, Position, Velocity};
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{facing_vector, wrap_degrees, Rect};
use tilestrike_motion::collision::move_and_collide;

use super::{load_body, store_body};

/// Set turn rate and velocity from the intent. Velocity does not carry
/// over between steps; reversing runs at half speed.
pub fn apply_intent(world: &mut World, player: Entity, intent: InputIntent, tuning: &Tuning) {
    let Ok((pl, vel, facing)) =
        world.query_one_mut::<(&mut Player, &mut Velocity, &Facing)>(player)
    else {
        return;
    };

    pl.rot_speed = intent.turn * tuning.player_rot_speed;

    let speed = if intent.throttle >= 0.0 {
        tuning.player_speed
    } else {
        tuning.player_speed / 2.0
    };
    vel.0 = facing_vector(facing.0) * speed * intent.throttle;
}

/// Rotate, then move with axis-separated wall collision.
pub fn advance(world: &mut World, player: Entity, dt: f32, obstacles: &[Rect]) {
    let Ok((pl, pos, vel, hit, facing)) = world
        .query_one_mut::<(&Player, &mut Position, &mut Velocity, &mut HitBox, &mut Facing)>(
            player,
        )
    else {
        return;
    };

    facing.0 = wrap_degrees(facing.0 + pl.rot_speed * dt);

    let mut body = load_body(pos, vel, hit);
    let delta = body.velocity * dt;
    move_and_collide(&mut body, delta, obstacles);
    store_body(&body, pos, vel, hit);
}
