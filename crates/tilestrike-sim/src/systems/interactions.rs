//! Cross-group overlap queries, run after everything has moved.
//!
//! Order is fixed: bullets against mobs, mobs against the player, then the
//! player against items. Entities already marked for removal this step are
//! left out of each query. Pairs are visited in handle order so the event
//! list does not depend on archetype layout.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::{debug, info};

use tilestrike_core::components::{
    Bullet, Facing, Health, HitBox, Item, Mob, Player, Position, Velocity,
};
use tilestrike_core::enums::{ItemKind, TintKind};
use tilestrike_core::events::SimEvent;
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{facing_vector, Rect};
use tilestrike_motion::collision::move_and_collide;

use super::effects::start_tint;
use super::{load_body, store_body};
use crate::commit::CommitBuffer;
use crate::handles::entity_id;

pub fn run(
    world: &mut World,
    player: Entity,
    obstacles: &[Rect],
    tuning: &Tuning,
    commit: &mut CommitBuffer,
    events: &mut Vec<SimEvent>,
) {
    bullets_hit_mobs(world, commit, events);
    mobs_hit_player(world, player, obstacles, tuning, commit, events);
    player_collects_items(world, player, tuning, commit, events);
}

/// Live mobs not yet marked for removal, with their hit boxes.
fn live_mobs(world: &World, commit: &CommitBuffer) -> Vec<(Entity, Rect)> {
    let mut mobs: Vec<(Entity, Rect)> = world
        .query::<(&Mob, &HitBox, &Health)>()
        .iter()
        .filter(|(entity, (_, _, health))| health.current > 0 && !commit.is_retired(*entity))
        .map(|(entity, (_, hit, _))| (entity, hit.0))
        .collect();
    mobs.sort_by_key(|(entity, _)| entity.to_bits());
    mobs
}

fn bullets_hit_mobs(world: &mut World, commit: &mut CommitBuffer, events: &mut Vec<SimEvent>) {
    let mut bullets: Vec<(Entity, Rect, i32)> = world
        .query::<(&Bullet, &HitBox)>()
        .iter()
        .filter(|(entity, _)| !commit.is_retired(*entity))
        .map(|(entity, (bullet, hit))| (entity, hit.0, bullet.damage))
        .collect();
    if bullets.is_empty() {
        return;
    }
    bullets.sort_by_key(|(entity, _, _)| entity.to_bits());

    for (mob, mob_box) in live_mobs(world, commit) {
        // A bullet is spent on the first mob it touches.
        for (bullet, bullet_box, damage) in &bullets {
            if commit.is_retired(*bullet) || !mob_box.overlaps(bullet_box) {
                continue;
            }
            commit.retire(*bullet);

            let Ok((health, vel)) = world.query_one_mut::<(&mut Health, &mut Velocity)>(mob)
            else {
                break;
            };
            health.current = (health.current - damage).max(0);
            vel.0 = Vec2::ZERO;
            events.push(SimEvent::MobHit {
                mob: entity_id(mob),
                damage: *damage,
                remaining: health.current,
            });
        }

        let Ok((health, pos)) = world.query_one_mut::<(&Health, &Position)>(mob) else {
            continue;
        };
        if health.current <= 0 {
            let position = pos.0;
            commit.retire(mob);
            info!(mob = entity_id(mob).0, x = position.x, y = position.y, "mob killed");
            events.push(SimEvent::MobDied {
                mob: entity_id(mob),
                position,
            });
        }
    }
}

fn mobs_hit_player(
    world: &mut World,
    player: Entity,
    obstacles: &[Rect],
    tuning: &Tuning,
    commit: &CommitBuffer,
    events: &mut Vec<SimEvent>,
) {
    let Ok((player_box, player_pos, alive)) = world
        .query_one_mut::<(&HitBox, &Position, &Health)>(player)
        .map(|(hit, pos, health)| (hit.0, pos.0, health.current > 0))
    else {
        return;
    };
    if !alive {
        return;
    }

    let touching: Vec<Entity> = live_mobs(world, commit)
        .into_iter()
        .filter(|(_, mob_box)| mob_box.overlaps(&player_box))
        .map(|(entity, _)| entity)
        .collect();
    let Some(&first) = touching.first() else {
        return;
    };

    let mut remaining = 0;
    for mob in &touching {
        if let Ok(vel) = world.query_one_mut::<&mut Velocity>(*mob) {
            vel.0 = Vec2::ZERO;
        }
        let Ok(health) = world.query_one_mut::<&mut Health>(player) else {
            return;
        };
        health.current = (health.current - tuning.mob_damage).max(0);
        remaining = health.current;
        events.push(SimEvent::PlayerHit {
            by: entity_id(*mob),
            damage: tuning.mob_damage,
            remaining,
        });
    }

    // Knock the player away from the first mob that touched it.
    let direction = match world.query_one_mut::<(&Position, &Facing)>(first) {
        Ok((mob_pos, mob_facing)) => {
            let away = (player_pos - mob_pos.0).normalize_or_zero();
            if away == Vec2::ZERO {
                facing_vector(mob_facing.0)
            } else {
                away
            }
        }
        Err(_) => Vec2::ZERO,
    };

    if let Ok((pl, pos, vel, hit)) = world
        .query_one_mut::<(&mut Player, &mut Position, &mut Velocity, &mut HitBox)>(player)
    {
        let mut body = load_body(pos, vel, hit);
        move_and_collide(&mut body, direction * tuning.mob_knockback, obstacles);
        store_body(&body, pos, vel, hit);
        pl.damage_tint = Some(start_tint(TintKind::Damage));

        if remaining <= 0 {
            info!(x = body.position.x, y = body.position.y, "player killed");
            events.push(SimEvent::PlayerDied {
                position: body.position,
            });
        }
    }
}

fn player_collects_items(
    world: &mut World,
    player: Entity,
    tuning: &Tuning,
    commit: &mut CommitBuffer,
    events: &mut Vec<SimEvent>,
) {
    let Ok((player_box, alive)) = world
        .query_one_mut::<(&HitBox, &Health)>(player)
        .map(|(hit, health)| (hit.0, health.current > 0))
    else {
        return;
    };
    if !alive {
        return;
    }

    let mut touching: Vec<(Entity, ItemKind, Vec2)> = world
        .query::<(&Item, &HitBox, &Position)>()
        .iter()
        .filter(|(entity, (_, hit, _))| !commit.is_retired(*entity) && hit.0.overlaps(&player_box))
        .map(|(entity, (item, _, pos))| (entity, item.kind, pos.0))
        .collect();
    touching.sort_by_key(|(entity, _, _)| entity.to_bits());

    for (item, kind, position) in touching {
        let Ok((pl, health)) = world.query_one_mut::<(&mut Player, &mut Health)>(player) else {
            return;
        };
        match kind {
            ItemKind::Health => {
                if health.current >= health.max {
                    continue;
                }
                health.current = (health.current + tuning.health_pack_amount).min(health.max);
                pl.heal_tint = Some(start_tint(TintKind::Heal));
                debug!(health = health.current, "health pack used");
            }
            ItemKind::Weapon { weapon } => {
                pl.weapon = weapon;
                debug!(weapon = weapon.name(), "weapon picked up");
            }
        }
        commit.retire(item);
        events.push(SimEvent::ItemPickedUp { kind, position });
    }
}
