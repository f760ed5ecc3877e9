//! Weapon system: cooldown-gated trigger pulls.
//!
//! A successful pull queues `bullet_count` bullets and one muzzle flash in
//! the commit buffer and kicks the shooter backwards. Nothing spawned here
//! exists in the world until the end of the step.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use tilestrike_core::components::{Facing, Player, Position, Velocity};
use tilestrike_core::constants::BULLET_SPEED_JITTER;
use tilestrike_core::events::SimEvent;
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{facing_vector, rotate_deg};

use crate::commit::CommitBuffer;
use crate::world_setup::{bullet_bundle, flash_bundle};

/// Pull the trigger of `shooter`'s current weapon at sim time `now_ms`.
///
/// Returns the `WeaponFired` event when a shot went off, `None` while the
/// weapon is cooling down.
pub fn try_fire(
    world: &mut World,
    shooter: Entity,
    now_ms: f64,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
    commit: &mut CommitBuffer,
) -> Option<SimEvent> {
    let Ok((player, pos, vel, facing)) =
        world.query_one_mut::<(&mut Player, &Position, &mut Velocity, &Facing)>(shooter)
    else {
        return None;
    };

    let spec = tuning.weapons.spec(player.weapon);
    if let Some(last) = player.last_shot_ms {
        if now_ms - last < spec.fire_rate_ms {
            return None;
        }
    }
    player.last_shot_ms = Some(now_ms);

    let aim = facing_vector(facing.0);
    let barrel = Vec2::from(tuning.barrel_offset);
    let muzzle = pos.0 + rotate_deg(barrel, -facing.0);

    vel.0 -= aim * spec.kickback;

    for _ in 0..spec.bullet_count {
        let spread = if spec.spread_deg > 0.0 {
            rng.gen_range(-spec.spread_deg..=spec.spread_deg)
        } else {
            0.0
        };
        let direction = facing_vector(facing.0 + spread);
        let speed = spec.bullet_speed * rng.gen_range(BULLET_SPEED_JITTER.0..=BULLET_SPEED_JITTER.1);
        commit.spawn(bullet_bundle(
            muzzle,
            direction * speed,
            player.weapon,
            spec,
            now_ms,
        ));
    }
    commit.spawn(flash_bundle(muzzle, facing.0, now_ms, tuning, rng));

    debug!(
        weapon = player.weapon.name(),
        bullets = spec.bullet_count,
        t_ms = now_ms,
        "weapon fired"
    );

    Some(SimEvent::WeaponFired {
        weapon: player.weapon,
        bullets: spec.bullet_count,
        muzzle,
    })
}
