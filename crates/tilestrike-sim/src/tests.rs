//! Tests for level loading, the step pipeline, combat and pickups.

use glam::Vec2;

use tilestrike_core::commands::InputIntent;
use tilestrike_core::components::{Health, Mob, Position, Velocity};
use tilestrike_core::constants::DT;
use tilestrike_core::enums::*;
use tilestrike_core::error::{LevelError, StepError};
use tilestrike_core::events::SimEvent;
use tilestrike_core::level::{LevelData, SpawnDescriptor};
use tilestrike_core::state::{PlayerView, StepResult};
use tilestrike_core::tuning::Tuning;
use tilestrike_core::types::{EntityId, Rect};

use crate::engine::{SimConfig, SimulationState};
use crate::handles::{entity_from_id, entity_id};
use crate::world_setup::load_level;

/// A mob parked well outside detection range so runs do not end early.
const FAR_MOB: (f32, f32) = (100.0, 1400.0);

fn arena(player: (f32, f32)) -> LevelData {
    LevelData::new(2048.0, 1536.0).spawn(SpawnDescriptor::new("player", player.0, player.1))
}

fn with_far_mob(level: LevelData) -> LevelData {
    level.spawn(SpawnDescriptor::new("zombie", FAR_MOB.0, FAR_MOB.1))
}

fn start(level: LevelData, tuning: Tuning) -> SimulationState {
    load_level(
        &level,
        SimConfig {
            tuning,
            ..Default::default()
        },
    )
    .unwrap()
}

fn idle(sim: &mut SimulationState) -> StepResult {
    sim.step(DT, InputIntent::idle()).unwrap()
}

fn player(sim: &SimulationState) -> PlayerView {
    sim.snapshot().player
}

fn fired_count(events: &[SimEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SimEvent::WeaponFired { .. }))
        .count()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ---- Level loading ----

#[test]
fn test_load_level_spawns_every_kind() {
    let level = arena((300.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", 900.0, 900.0))
        .spawn(SpawnDescriptor::new("Zombie", 1200.0, 900.0).with_size(30.0, 30.0))
        .spawn(SpawnDescriptor::new("health", 500.0, 500.0))
        .spawn(SpawnDescriptor::new("shotgun", 600.0, 500.0))
        .spawn(SpawnDescriptor::new("wall", 0.0, 0.0).with_size(2048.0, 64.0))
        .obstacle(Rect::new(0.0, 1472.0, 2048.0, 64.0));

    let sim = start(level, Tuning::default());
    let snap = sim.snapshot();

    assert_eq!(snap.mobs.len(), 2);
    assert_eq!(snap.items.len(), 2);
    assert_eq!(snap.live_mobs, 2);
    assert_eq!(sim.obstacles().len(), 2);
    assert_eq!(snap.player.position, Vec2::new(300.0, 300.0));
    assert_eq!(snap.player.health, 100);
    assert_eq!(snap.player.weapon, WeaponId::Pistol);
    assert_eq!(snap.map_size, Vec2::new(2048.0, 1536.0));
    // Sized descriptors spawn at the box center.
    assert!(snap
        .mobs
        .iter()
        .any(|m| m.position == Vec2::new(1215.0, 915.0)));
    // Every mob chases the player.
    let player_id = snap.player.id.unwrap();
    for view in &snap.mobs {
        let entity = entity_from_id(view.id).unwrap();
        let mob = sim.world().get::<&Mob>(entity).unwrap();
        assert_eq!(mob.target, player_id);
        assert!(tilestrike_core::constants::MOB_SPEEDS.contains(&mob.speed));
    }
}

#[test]
fn test_load_level_rejects_unknown_kind() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("dragon", 10.0, 10.0));
    let err = load_level(&level, SimConfig::default()).err().unwrap();
    assert!(
        matches!(err, LevelError::InvalidSpawnDescriptor { index: 1, ref kind, .. } if kind == "dragon")
    );
}

#[test]
fn test_load_level_requires_exactly_one_player() {
    let none = LevelData::new(640.0, 480.0).spawn(SpawnDescriptor::new("zombie", 10.0, 10.0));
    assert_eq!(
        load_level(&none, SimConfig::default()).err(),
        Some(LevelError::MissingPlayer)
    );

    let two = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("player", 400.0, 400.0));
    assert_eq!(
        load_level(&two, SimConfig::default()).err(),
        Some(LevelError::DuplicatePlayer { index: 1 })
    );
}

#[test]
fn test_load_level_rejects_bad_geometry() {
    let sizeless_wall = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("wall", 0.0, 0.0));
    assert!(matches!(
        load_level(&sizeless_wall, SimConfig::default()).err(),
        Some(LevelError::InvalidSpawnDescriptor { index: 1, .. })
    ));

    let outside = LevelData::new(640.0, 480.0).spawn(SpawnDescriptor::new("player", 5000.0, 10.0));
    assert!(matches!(
        load_level(&outside, SimConfig::default()).err(),
        Some(LevelError::InvalidSpawnDescriptor { index: 0, .. })
    ));

    let nan = LevelData::new(640.0, 480.0).spawn(SpawnDescriptor::new("player", f32::NAN, 10.0));
    assert!(load_level(&nan, SimConfig::default()).is_err());

    let empty_map = LevelData::new(0.0, 480.0).spawn(SpawnDescriptor::new("player", 0.0, 0.0));
    assert!(matches!(
        load_level(&empty_map, SimConfig::default()).err(),
        Some(LevelError::InvalidMapSize { .. })
    ));

    let bad_obstacle = arena((300.0, 300.0)).obstacle(Rect::new(0.0, 0.0, -64.0, 64.0));
    assert_eq!(
        load_level(&bad_obstacle, SimConfig::default()).err(),
        Some(LevelError::InvalidObstacle { index: 0 })
    );
}

#[test]
fn test_load_level_validates_tuning() {
    let level = arena((300.0, 300.0));
    for tuning in [
        Tuning {
            mob_growl_chance: 2.0,
            ..Default::default()
        },
        Tuning {
            max_step_secs: -0.1,
            ..Default::default()
        },
    ] {
        let config = SimConfig {
            tuning,
            ..Default::default()
        };
        assert!(matches!(
            load_level(&level, config).err(),
            Some(LevelError::InvalidTuning(_))
        ));
    }
}

#[test]
fn test_camera_clamped_at_load() {
    let sim = start(with_far_mob(arena((2000.0, 1500.0))), Tuning::default());
    assert_eq!(sim.snapshot().camera_offset, Vec2::new(-1024.0, -768.0));

    let sim = start(with_far_mob(arena((1000.0, 700.0))), Tuning::default());
    assert_eq!(sim.snapshot().camera_offset, Vec2::new(-488.0, -316.0));
}

// ---- Step validation ----

#[test]
fn test_invalid_input_leaves_state_untouched() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());
    idle(&mut sim);
    let before = serde_json::to_string(&sim.snapshot()).unwrap();

    assert!(matches!(
        sim.step(-0.5, InputIntent::firing()),
        Err(StepError::InvalidDelta(_))
    ));
    assert!(matches!(
        sim.step(f32::NAN, InputIntent::idle()),
        Err(StepError::InvalidDelta(_))
    ));
    let bad_intent = InputIntent {
        turn: f32::INFINITY,
        throttle: 0.0,
        fire: true,
    };
    assert_eq!(sim.step(DT, bad_intent), Err(StepError::InvalidIntent));

    let after = serde_json::to_string(&sim.snapshot()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_large_delta_is_clamped() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());
    let result = sim.step(1.0, InputIntent::idle()).unwrap();
    assert!((result.snapshot.time.elapsed_ms - 100.0).abs() < 1e-3);
    assert_eq!(result.snapshot.time.tick, 1);
}

#[test]
fn test_pause_freezes_everything() {
    let mut sim = start(
        with_far_mob(arena((300.0, 300.0))).spawn(SpawnDescriptor::new("zombie", 600.0, 300.0)),
        Tuning::default(),
    );
    sim.set_paused(true);
    let before = sim.snapshot();

    for _ in 0..10 {
        let result = sim.step(DT, InputIntent::firing()).unwrap();
        assert!(result.events.is_empty());
        assert!(result.snapshot.paused);
    }
    let during = sim.snapshot();
    assert_eq!(during.time, before.time);
    assert_eq!(during.mobs, before.mobs);
    assert!(during.bullets.is_empty());

    sim.set_paused(false);
    let result = sim.step(DT, InputIntent::firing()).unwrap();
    assert_eq!(result.snapshot.time.tick, 1);
    assert_eq!(fired_count(&result.events), 1);
}

// ---- Player movement ----

#[test]
fn test_throttle_and_turn() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());

    let forward = InputIntent {
        turn: 0.0,
        throttle: 1.0,
        fire: false,
    };
    sim.step(DT, forward).unwrap();
    assert!(approx(player(&sim).position.x, 300.0 + 300.0 * DT));

    let reverse = InputIntent {
        turn: 0.0,
        throttle: -1.0,
        fire: false,
    };
    sim.step(DT, reverse).unwrap();
    assert!(approx(player(&sim).position.x, 300.0 + 150.0 * DT));

    // Over-range input is clamped to a full turn.
    let left = InputIntent {
        turn: 3.0,
        throttle: 0.0,
        fire: false,
    };
    sim.step(DT, left).unwrap();
    assert!(approx(player(&sim).rotation, 250.0 * DT));
    assert_eq!(player(&sim).position.y, 300.0);
}

#[test]
fn test_player_stops_at_wall() {
    let level = with_far_mob(arena((300.0, 300.0))).obstacle(Rect::new(330.0, 200.0, 64.0, 200.0));
    let mut sim = start(level, Tuning::default());
    let forward = InputIntent {
        turn: 0.0,
        throttle: 1.0,
        fire: false,
    };
    for _ in 0..10 {
        sim.step(DT, forward).unwrap();
    }
    let view = player(&sim);
    assert_eq!(view.position.x, 330.0 - 17.5);
    assert_eq!(view.hit_box.center(), view.position);
    assert!(!view.hit_box.overlaps(&sim.obstacles()[0]));
}

// ---- Weapons ----

#[test]
fn test_fire_rate_gates_trigger() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());

    let mut fired = 0;
    for _ in 0..10 {
        fired += fired_count(&sim.step(DT, InputIntent::firing()).unwrap().events);
    }
    assert_eq!(fired, 1, "Pistol cools down for 250 ms");

    for _ in 0..20 {
        fired += fired_count(&sim.step(DT, InputIntent::firing()).unwrap().events);
    }
    assert_eq!(fired, 2);
}

#[test]
fn test_bullet_count_per_weapon() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());
    let result = sim.step(DT, InputIntent::firing()).unwrap();
    assert!(matches!(
        result.events[0],
        SimEvent::WeaponFired {
            weapon: WeaponId::Pistol,
            bullets: 1,
            ..
        }
    ));
    assert_eq!(result.snapshot.bullets.len(), 1);
    assert_eq!(result.snapshot.effects.len(), 1);

    let tuning = Tuning {
        starting_weapon: WeaponId::Shotgun,
        ..Default::default()
    };
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), tuning);
    let result = sim.step(DT, InputIntent::firing()).unwrap();
    assert_eq!(fired_count(&result.events), 1);
    assert_eq!(result.snapshot.bullets.len(), 12);
    assert_eq!(result.snapshot.effects.len(), 1, "One flash per trigger pull");
    for bullet in &result.snapshot.bullets {
        assert_eq!(
            bullet.sprite,
            SpriteKey::Bullet {
                size: BulletSize::Small
            }
        );
    }
}

#[test]
fn test_muzzle_and_kickback() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());
    let result = sim.step(DT, InputIntent::firing()).unwrap();

    let SimEvent::WeaponFired { muzzle, .. } = result.events[0] else {
        panic!("expected a shot, got {:?}", result.events);
    };
    assert_eq!(muzzle, Vec2::new(325.0, 310.0));
    // Kickback pushes the shooter backwards for the rest of the step.
    assert!(approx(result.snapshot.player.position.x, 300.0 - 200.0 * DT));
}

#[test]
fn test_bullets_and_flash_retire_after_budget() {
    let mut sim = start(with_far_mob(arena((300.0, 300.0))), Tuning::default());
    sim.step(DT, InputIntent::firing()).unwrap();

    let snap = idle(&mut sim).snapshot;
    assert_eq!(snap.effects.len(), 1);
    idle(&mut sim);
    let snap = idle(&mut sim).snapshot;
    assert!(snap.effects.is_empty(), "Flash lasts 40 ms");

    for _ in 0..27 {
        idle(&mut sim);
    }
    assert_eq!(sim.snapshot().bullets.len(), 1);

    for _ in 0..40 {
        idle(&mut sim);
    }
    assert!(sim.snapshot().bullets.is_empty(), "Pistol bullets live 1000 ms");
}

#[test]
fn test_bullet_dies_on_wall() {
    let level = with_far_mob(arena((300.0, 300.0))).obstacle(Rect::new(600.0, 250.0, 64.0, 120.0));
    let mut sim = start(level, Tuning::default());
    sim.step(DT, InputIntent::firing()).unwrap();
    for _ in 0..45 {
        idle(&mut sim);
    }
    let snap = sim.snapshot();
    assert!(snap.time.elapsed_ms < 1000.0);
    assert!(snap.bullets.is_empty());
}

#[test]
fn test_bullet_dies_off_map() {
    let mut sim = start(with_far_mob(arena((2000.0, 300.0))), Tuning::default());
    sim.step(DT, InputIntent::firing()).unwrap();
    for _ in 0..10 {
        idle(&mut sim);
    }
    assert!(sim.snapshot().bullets.is_empty());
}

// ---- Mobs ----

#[test]
fn test_mob_pursues_inside_detection_radius() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 600.0, 300.0));
    let mut sim = start(level, Tuning::default());
    let snap = idle(&mut sim).snapshot;
    let mob = &snap.mobs[0];
    assert!(mob.position.x < 600.0);
    assert_eq!(mob.position.y, 300.0);
    assert!(approx(mob.rotation, 180.0));
    assert_eq!(mob.hit_box.center(), mob.position);
}

#[test]
fn test_mob_idles_outside_detection_radius() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 800.0, 300.0));
    let mut sim = start(level, Tuning::default());
    for _ in 0..30 {
        idle(&mut sim);
    }
    let snap = sim.snapshot();
    assert_eq!(snap.mobs[0].position, Vec2::new(800.0, 300.0));
    let entity = entity_from_id(snap.mobs[0].id).unwrap();
    assert_eq!(sim.world().get::<&Mob>(entity).unwrap().acceleration, Vec2::ZERO);
}

#[test]
fn test_stale_target_idles_mob() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 600.0, 300.0));
    let mut sim = start(level, Tuning::default());
    let mob = entity_from_id(sim.snapshot().mobs[0].id).unwrap();

    // Point the mob at an entity that no longer exists.
    let ghost = sim.world_mut().spawn((
        Position(Vec2::new(650.0, 300.0)),
        Health {
            current: 100,
            max: 100,
        },
    ));
    sim.world_mut().get::<&mut Mob>(mob).unwrap().target = entity_id(ghost);
    sim.world_mut().despawn(ghost).unwrap();

    let result = idle(&mut sim);
    assert_eq!(result.snapshot.mobs[0].position, Vec2::new(600.0, 300.0));
    assert_eq!(result.terminal, RunState::Running);

    // A dead target is just as stale.
    let corpse = sim.world_mut().spawn((
        Position(Vec2::new(650.0, 300.0)),
        Health { current: 0, max: 100 },
    ));
    sim.world_mut().get::<&mut Mob>(mob).unwrap().target = entity_id(corpse);
    let result = idle(&mut sim);
    assert_eq!(result.snapshot.mobs[0].position, Vec2::new(600.0, 300.0));
}

#[test]
fn test_unknown_target_id_is_stale() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 600.0, 300.0));
    let mut sim = start(level, Tuning::default());
    let mob = entity_from_id(sim.snapshot().mobs[0].id).unwrap();
    sim.world_mut().get::<&mut Mob>(mob).unwrap().target = EntityId(0);

    let result = idle(&mut sim);
    assert_eq!(result.snapshot.mobs[0].position, Vec2::new(600.0, 300.0));
}

#[test]
fn test_pursuing_mob_growls() {
    let tuning = Tuning {
        mob_growl_chance: 1.0,
        ..Default::default()
    };
    let level = arena((300.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", 600.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", FAR_MOB.0, FAR_MOB.1));
    let mut sim = start(level, tuning);
    let result = idle(&mut sim);
    let growls = result
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::MobGrowl { .. }))
        .count();
    assert_eq!(growls, 1, "Only the pursuing mob growls");
}

// ---- Combat ----

#[test]
fn test_bullet_damages_and_stops_mob() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 600.0, 300.0));
    let mut sim = start(level, Tuning::default());
    idle(&mut sim);

    let mob_pos = sim.snapshot().mobs[0].position;
    let bullet = sim.spawn_test_bullet(mob_pos, Vec2::ZERO, WeaponId::Pistol);
    let result = idle(&mut sim);

    assert!(result.events.iter().any(|e| matches!(
        e,
        SimEvent::MobHit {
            damage: 10,
            remaining: 90,
            ..
        }
    )));
    assert!(sim.world().get::<&Position>(bullet).is_err(), "Bullet consumed");
    let mob = entity_from_id(result.snapshot.mobs[0].id).unwrap();
    assert_eq!(sim.world().get::<&Velocity>(mob).unwrap().0, Vec2::ZERO);
    assert_eq!(result.terminal, RunState::Running);
}

#[test]
fn test_bullet_spent_on_first_mob() {
    let level = arena((300.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", 1000.0, 1000.0))
        .spawn(SpawnDescriptor::new("zombie", 1010.0, 1000.0));
    let mut sim = start(level, Tuning::default());

    let mobs = sim.snapshot().mobs;
    let between = (mobs[0].position + mobs[1].position) / 2.0;
    sim.spawn_test_bullet(between, Vec2::ZERO, WeaponId::Pistol);
    let result = idle(&mut sim);

    let hits = result
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::MobHit { .. }))
        .count();
    assert_eq!(hits, 1);
    let total: i32 = result.snapshot.mobs.iter().map(|m| m.health).sum();
    assert_eq!(total, 2 * sim.tuning().mob_health - 10);
}

#[test]
fn test_last_mob_killed_clears_level() {
    let tuning = Tuning {
        mob_health: 10,
        ..Default::default()
    };
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 1000.0, 1000.0));
    let mut sim = start(level, tuning);
    sim.spawn_test_bullet(Vec2::new(1000.0, 1000.0), Vec2::ZERO, WeaponId::Pistol);

    let result = idle(&mut sim);

    assert_eq!(result.terminal, RunState::Cleared);
    assert_eq!(result.snapshot.live_mobs, 0);
    assert!(result.snapshot.mobs.is_empty());
    let kinds: Vec<&str> = result
        .events
        .iter()
        .map(|e| match e {
            SimEvent::MobHit { .. } => "hit",
            SimEvent::MobDied { .. } => "died",
            SimEvent::LevelCleared => "cleared",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["hit", "died", "cleared"]);
}

#[test]
fn test_mob_contact_defeats_player() {
    let tuning = Tuning {
        player_health: 10,
        mob_growl_chance: 0.0,
        ..Default::default()
    };
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 310.0, 300.0));
    let mut sim = start(level, tuning);

    let result = idle(&mut sim);

    assert_eq!(result.terminal, RunState::Defeated);
    assert_eq!(result.snapshot.player.health, 0);
    assert!(matches!(
        result.events[..],
        [
            SimEvent::PlayerHit { remaining: 0, .. },
            SimEvent::PlayerDied { .. }
        ]
    ));
}

#[test]
fn test_terminal_state_is_sticky() {
    let tuning = Tuning {
        player_health: 10,
        ..Default::default()
    };
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 310.0, 300.0));
    let mut sim = start(level, tuning);
    idle(&mut sim);
    let frozen = sim.snapshot();

    for _ in 0..5 {
        let result = sim.step(DT, InputIntent::firing()).unwrap();
        assert_eq!(result.terminal, RunState::Defeated);
        assert!(result.events.is_empty());
    }
    assert_eq!(sim.snapshot(), frozen);
}

#[test]
fn test_contact_knocks_player_back() {
    let level = arena((300.0, 300.0)).spawn(SpawnDescriptor::new("zombie", 320.0, 300.0));
    let mut sim = start(level, Tuning::default());

    let result = idle(&mut sim);

    let view = &result.snapshot.player;
    assert_eq!(view.health, 90);
    assert!(approx(view.position.x, 280.0));
    assert_eq!(view.position.y, 300.0);
    assert_eq!(view.tint.map(|t| t.kind), Some(TintKind::Damage));
    let mob = entity_from_id(result.snapshot.mobs[0].id).unwrap();
    assert_eq!(sim.world().get::<&Velocity>(mob).unwrap().0, Vec2::ZERO);
}

#[test]
fn test_knockback_respects_walls() {
    // Wall right behind the player: knockback cannot push through it.
    let level = arena((300.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", 320.0, 300.0))
        .obstacle(Rect::new(218.5, 200.0, 64.0, 200.0));
    let mut sim = start(level, Tuning::default());

    let view = idle(&mut sim).snapshot.player;
    assert_eq!(view.position.x, 282.5 + 17.5);
    assert!(!view.hit_box.overlaps(&sim.obstacles()[0]));
}

// ---- Items ----

#[test]
fn test_health_pack_skipped_at_full_health() {
    let level = with_far_mob(arena((300.0, 300.0))).spawn(SpawnDescriptor::new("health", 300.0, 300.0));
    let mut sim = start(level, Tuning::default());

    let result = idle(&mut sim);
    assert_eq!(result.snapshot.items.len(), 1);
    assert!(!result
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ItemPickedUp { .. })));
}

#[test]
fn test_health_never_exceeds_max() {
    let level = with_far_mob(arena((300.0, 300.0)))
        .spawn(SpawnDescriptor::new("health", 300.0, 300.0))
        .spawn(SpawnDescriptor::new("health", 305.0, 300.0))
        .spawn(SpawnDescriptor::new("health", 295.0, 300.0));
    let mut sim = start(level, Tuning::default());
    let player_entity = sim.player();
    sim.world_mut()
        .get::<&mut Health>(player_entity)
        .unwrap()
        .current = 50;

    let result = idle(&mut sim);

    assert_eq!(result.snapshot.player.health, 100);
    assert!(result.snapshot.items.is_empty(), "90 < 100 so the third pack is used too");
    assert_eq!(
        result
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::ItemPickedUp { .. }))
            .count(),
        3
    );
}

#[test]
fn test_heal_tint_runs_its_course() {
    let level = with_far_mob(arena((300.0, 300.0))).spawn(SpawnDescriptor::new("health", 300.0, 300.0));
    let mut sim = start(level, Tuning::default());
    let player_entity = sim.player();
    sim.world_mut()
        .get::<&mut Health>(player_entity)
        .unwrap()
        .current = 95;

    let view = idle(&mut sim).snapshot.player;
    assert_eq!(view.health, 100);
    let tint = view.tint.unwrap();
    assert_eq!(tint.kind, TintKind::Heal);
    assert_eq!(tint.alpha, 0);

    for _ in 0..21 {
        idle(&mut sim);
    }
    assert!(player(&sim).tint.is_some());
    idle(&mut sim);
    assert!(player(&sim).tint.is_none());
}

#[test]
fn test_weapon_pickup_switches_weapon() {
    let level = with_far_mob(arena((300.0, 300.0))).spawn(SpawnDescriptor::new("shotgun", 300.0, 300.0));
    let mut sim = start(level, Tuning::default());

    let result = idle(&mut sim);
    assert_eq!(result.snapshot.player.weapon, WeaponId::Shotgun);
    assert!(result.snapshot.items.is_empty());

    let result = sim.step(DT, InputIntent::firing()).unwrap();
    assert_eq!(result.snapshot.bullets.len(), 12);
}

#[test]
fn test_item_bob_is_visual_only() {
    let level = with_far_mob(arena((300.0, 300.0))).spawn(SpawnDescriptor::new("health", 1000.0, 1000.0));
    let mut sim = start(level, Tuning::default());
    for _ in 0..10 {
        idle(&mut sim);
    }
    let item = &sim.snapshot().items[0];
    assert_eq!(item.hit_box.center(), Vec2::new(1000.0, 1000.0));
    assert_eq!(item.position.x, 1000.0);
    assert!((item.position.y - 1000.0).abs() > 1.0);
    assert!((item.position.y - 1000.0).abs() <= 7.5);
}

// ---- Determinism ----

fn scripted_run(seed: u64) -> Vec<String> {
    let level = arena((600.0, 600.0))
        .spawn(SpawnDescriptor::new("zombie", 850.0, 600.0))
        .spawn(SpawnDescriptor::new("zombie", 600.0, 300.0))
        .spawn(SpawnDescriptor::new("zombie", 400.0, 800.0))
        .spawn(SpawnDescriptor::new("health", 700.0, 700.0))
        .spawn(SpawnDescriptor::new("zombie", FAR_MOB.0, FAR_MOB.1))
        .obstacle(Rect::new(700.0, 400.0, 64.0, 128.0));
    let mut sim = load_level(
        &level,
        SimConfig {
            seed,
            ..Default::default()
        },
    )
    .unwrap();

    (0..300)
        .map(|i| {
            let intent = InputIntent {
                turn: ((i as f32) * 0.05).sin(),
                throttle: if i % 90 < 45 { 0.5 } else { -0.5 },
                fire: true,
            };
            let result = sim.step(DT, intent).unwrap();
            serde_json::to_string(&result).unwrap()
        })
        .collect()
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(scripted_run(12345), scripted_run(12345));
}

#[test]
fn test_determinism_different_seeds() {
    let a = scripted_run(111);
    let b = scripted_run(222);
    assert_ne!(a, b, "Spread and mob speeds come from the seeded RNG");
}
