//! Cleanup system: retires bullets and flashes past their time budget,
//! then applies the step's deferred spawns and removals.

use hecs::World;

use tilestrike_core::components::{Bullet, MuzzleFlash};

use crate::commit::CommitBuffer;

pub fn run(world: &mut World, now_ms: f64, commit: &mut CommitBuffer) {
    for (entity, bullet) in world.query_mut::<&Bullet>() {
        if now_ms - bullet.spawned_ms > bullet.lifetime_ms {
            commit.retire(entity);
        }
    }

    for (entity, flash) in world.query_mut::<&MuzzleFlash>() {
        if now_ms - flash.spawned_ms > flash.duration_ms {
            commit.retire(entity);
        }
    }

    commit.apply(world);
}
