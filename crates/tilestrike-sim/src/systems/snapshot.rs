//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! Read-only: it never modifies the world.

use glam::Vec2;
use hecs::{Entity, World};

use tilestrike_core::components::*;
use tilestrike_core::enums::RunState;
use tilestrike_core::state::*;
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{Rect, SimTime};

use super::effects::{bob_offset, tint_alpha};
use crate::camera::Camera;
use crate::handles::entity_id;

/// Engine state the snapshot needs besides the world itself.
pub struct FrameContext<'a> {
    pub time: SimTime,
    pub run_state: RunState,
    pub paused: bool,
    pub camera: &'a Camera,
    pub map_size: Vec2,
    pub player: Entity,
    pub tuning: &'a Tuning,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(world: &World, ctx: &FrameContext) -> FrameSnapshot {
    let mobs = build_mobs(world);
    let live_mobs = mobs.iter().filter(|m| m.health > 0).count() as u32;

    FrameSnapshot {
        time: ctx.time,
        run_state: ctx.run_state,
        paused: ctx.paused,
        camera_offset: ctx.camera.offset(),
        map_size: ctx.map_size,
        player: build_player(world, ctx.player),
        mobs,
        bullets: build_bullets(world),
        items: build_items(world, ctx.tuning),
        effects: build_effects(world),
        live_mobs,
    }
}

fn build_player(world: &World, player: Entity) -> PlayerView {
    let Ok(mut query) =
        world.query_one::<(&Player, &Position, &Facing, &Health, &HitBox)>(player)
    else {
        return PlayerView::default();
    };
    let Some((pl, pos, facing, health, hit)) = query.get() else {
        return PlayerView::default();
    };

    // Damage takes priority when both tints are running.
    let tint = pl
        .damage_tint
        .or(pl.heal_tint)
        .map(|timer| TintView {
            kind: timer.kind,
            alpha: tint_alpha(&timer),
        });

    PlayerView {
        id: Some(entity_id(player)),
        position: pos.0,
        rotation: facing.0,
        health: health.current,
        max_health: health.max,
        weapon: pl.weapon,
        hit_box: hit.0,
        tint,
    }
}

fn build_mobs(world: &World) -> Vec<MobView> {
    let mut mobs: Vec<MobView> = world
        .query::<(&Mob, &Position, &Facing, &Health, &HitBox)>()
        .iter()
        .map(|(entity, (_, pos, facing, health, hit))| MobView {
            id: entity_id(entity),
            position: pos.0,
            rotation: facing.0,
            health: health.current,
            max_health: health.max,
            hit_box: hit.0,
        })
        .collect();
    mobs.sort_by_key(|m| m.id);
    mobs
}

fn build_bullets(world: &World) -> Vec<BodyView> {
    let mut bullets: Vec<BodyView> = world
        .query::<(&Bullet, &Sprite, &Position, &Facing, &HitBox)>()
        .iter()
        .map(|(entity, (_, sprite, pos, facing, hit))| BodyView {
            id: entity_id(entity),
            sprite: sprite.key,
            position: pos.0,
            rotation: facing.0,
            size: sprite.size,
            hit_box: hit.0,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}

/// Items are drawn at their bobbed position; the hit box does not move.
fn build_items(world: &World, tuning: &Tuning) -> Vec<BodyView> {
    let mut items: Vec<BodyView> = world
        .query::<(&Item, &Sprite, &Position, &HitBox)>()
        .iter()
        .map(|(entity, (item, sprite, pos, hit))| BodyView {
            id: entity_id(entity),
            sprite: sprite.key,
            position: pos.0 + Vec2::new(0.0, bob_offset(item, tuning)),
            rotation: 0.0,
            size: sprite.size,
            hit_box: hit.0,
        })
        .collect();
    items.sort_by_key(|i| i.id);
    items
}

fn build_effects(world: &World) -> Vec<BodyView> {
    let mut effects: Vec<BodyView> = world
        .query::<(&MuzzleFlash, &Sprite, &Position, &Facing)>()
        .iter()
        .map(|(entity, (_, sprite, pos, facing))| BodyView {
            id: entity_id(entity),
            sprite: sprite.key,
            position: pos.0,
            rotation: facing.0,
            size: sprite.size,
            hit_box: Rect::from_center(pos.0, sprite.size),
        })
        .collect();
    effects.sort_by_key(|e| e.id);
    effects
}
