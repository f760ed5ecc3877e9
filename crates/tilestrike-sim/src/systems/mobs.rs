//! Mob system: steering toward the target, integration, wall collision.
//!
//! Two passes. The first reads a snapshot of every live mob's position and
//! computes steering; the second applies it. Mobs never see each other's
//! positions from partway through the phase.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use tilestrike_core::components::{Facing, Health, HitBox, Mob, Position, Velocity};
use tilestrike_core::events::SimEvent;
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{EntityId, Rect};
use tilestrike_motion::collision::move_and_collide;
use tilestrike_motion::steering::{integrate, steer, SteeringContext, SteeringOutput, SteeringParams};

use super::{load_body, store_body};
use crate::handles::{entity_from_id, entity_id};

/// Position of the entity behind `target`, if it still exists and is alive.
pub fn resolve_target(world: &World, target: EntityId) -> Option<Vec2> {
    let entity = entity_from_id(target)?;
    let health = world.get::<&Health>(entity).ok()?;
    if health.current <= 0 {
        return None;
    }
    let pos = world.get::<&Position>(entity).ok()?;
    Some(pos.0)
}

pub fn run(
    world: &mut World,
    dt: f32,
    obstacles: &[Rect],
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    let params = SteeringParams {
        detect_radius: tuning.mob_detect_radius,
        avoid_radius: tuning.mob_avoid_radius,
    };

    let neighbours: Vec<Vec2> = world
        .query::<(&Mob, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.current > 0)
        .map(|(_, (_, pos, _))| pos.0)
        .collect();

    let mut plans: Vec<(Entity, SteeringOutput)> = Vec::new();
    for (entity, (mob, pos, vel, health)) in world
        .query::<(&Mob, &Position, &Velocity, &Health)>()
        .iter()
    {
        if health.current <= 0 {
            continue;
        }
        let target = resolve_target(world, mob.target);
        if target.is_none() {
            debug!(mob = entity_id(entity).0, "stale target, idling");
        }
        let ctx = SteeringContext {
            position: pos.0,
            velocity: vel.0,
            speed: mob.speed,
            target,
            neighbours: &neighbours,
            params,
        };
        plans.push((entity, steer(&ctx)));
    }

    for (entity, plan) in plans {
        let Ok((mob, pos, vel, hit, facing)) = world
            .query_one_mut::<(&mut Mob, &mut Position, &mut Velocity, &mut HitBox, &mut Facing)>(
                entity,
            )
        else {
            continue;
        };

        mob.acceleration = plan.acceleration;
        if !plan.pursuing {
            continue;
        }
        if let Some(angle) = plan.facing {
            facing.0 = angle;
        }

        let (new_vel, displacement) = integrate(vel.0, plan.acceleration, dt);
        let mut body = load_body(pos, vel, hit);
        body.velocity = new_vel;
        move_and_collide(&mut body, displacement, obstacles);
        store_body(&body, pos, vel, hit);

        if rng.gen_bool(tuning.mob_growl_chance) {
            events.push(SimEvent::MobGrowl {
                mob: entity_id(entity),
            });
        }
    }
}
