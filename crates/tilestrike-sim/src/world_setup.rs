//! Level loading and entity spawn factories.
//!
//! `load_level` validates every descriptor before touching the world, so a
//! bad level never yields a half-built simulation.

use glam::Vec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tilestrike_core::components::*;
use tilestrike_core::constants::*;
use tilestrike_core::enums::*;
use tilestrike_core::error::LevelError;
use tilestrike_core::level::{LevelData, SpawnDescriptor};
use tilestrike_core::tuning::{Tuning, WeaponSpec};
use tilestrike_core::types::{facing_of, EntityId, Rect};

use crate::engine::{SimConfig, SimulationState};
use crate::handles::entity_id;

/// A descriptor that passed validation.
enum Placement {
    Player(Vec2),
    Mob(Vec2),
    Item(ItemKind, Vec2),
    Wall(Rect),
}

/// Build a simulation from a decoded level.
pub fn load_level(level: &LevelData, config: SimConfig) -> Result<SimulationState, LevelError> {
    config
        .tuning
        .validate()
        .map_err(|err| LevelError::InvalidTuning(err.to_string()))?;

    let map_ok = level.width.is_finite()
        && level.height.is_finite()
        && level.width > 0.0
        && level.height > 0.0;
    if !map_ok {
        return Err(LevelError::InvalidMapSize {
            width: level.width,
            height: level.height,
        });
    }
    let bounds = level.bounds();

    let mut obstacles = Vec::with_capacity(level.obstacles.len());
    for (index, rect) in level.obstacles.iter().enumerate() {
        if !rect.is_finite() || rect.width <= 0.0 || rect.height <= 0.0 {
            return Err(LevelError::InvalidObstacle { index });
        }
        obstacles.push(*rect);
    }

    let mut placements = Vec::with_capacity(level.spawns.len());
    let mut player_seen = false;
    for (index, descriptor) in level.spawns.iter().enumerate() {
        let placement = validate_descriptor(index, descriptor, &bounds)?;
        if matches!(placement, Placement::Player(_)) {
            if player_seen {
                return Err(LevelError::DuplicatePlayer { index });
            }
            player_seen = true;
        }
        placements.push(placement);
    }
    if !player_seen {
        return Err(LevelError::MissingPlayer);
    }

    let tuning = config.tuning;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut world = World::new();

    // Player first so mobs can hold its handle.
    let mut player = None;
    for placement in &placements {
        if let Placement::Player(at) = placement {
            player = Some(spawn_player(&mut world, *at, &tuning));
        }
    }
    let Some(player) = player else {
        return Err(LevelError::MissingPlayer);
    };

    let mut mobs = 0usize;
    let mut items = 0usize;
    for placement in placements {
        match placement {
            Placement::Player(_) => {}
            Placement::Mob(at) => {
                spawn_mob(&mut world, &mut rng, at, entity_id(player), &tuning);
                mobs += 1;
            }
            Placement::Item(kind, at) => {
                spawn_item(&mut world, at, kind, &tuning);
                items += 1;
            }
            Placement::Wall(rect) => obstacles.push(rect),
        }
    }

    info!(
        width = level.width,
        height = level.height,
        mobs,
        items,
        obstacles = obstacles.len(),
        seed = config.seed,
        "level loaded"
    );

    Ok(SimulationState::from_world(
        world,
        player,
        obstacles,
        bounds,
        rng,
        tuning,
        config.viewport,
    ))
}

fn validate_descriptor(
    index: usize,
    descriptor: &SpawnDescriptor,
    bounds: &Rect,
) -> Result<Placement, LevelError> {
    let invalid = |reason: &str| LevelError::InvalidSpawnDescriptor {
        index,
        kind: descriptor.kind.clone(),
        reason: reason.to_string(),
    };

    let kind: SpawnKind = descriptor
        .kind
        .parse()
        .map_err(|_| invalid("unknown object kind"))?;

    if !descriptor.x.is_finite() || !descriptor.y.is_finite() {
        return Err(invalid("position is not finite"));
    }

    match kind {
        SpawnKind::Wall => wall_rect(descriptor).map(Placement::Wall).map_err(invalid),
        SpawnKind::Player => spawn_point(descriptor, bounds)
            .map(Placement::Player)
            .map_err(invalid),
        SpawnKind::Mob => spawn_point(descriptor, bounds)
            .map(Placement::Mob)
            .map_err(invalid),
        SpawnKind::Item(item) => spawn_point(descriptor, bounds)
            .map(|at| Placement::Item(item, at))
            .map_err(invalid),
    }
}

fn wall_rect(descriptor: &SpawnDescriptor) -> Result<Rect, &'static str> {
    let (Some(width), Some(height)) = (descriptor.width, descriptor.height) else {
        return Err("wall needs a width and height");
    };
    let rect = Rect::new(descriptor.x, descriptor.y, width, height);
    if !rect.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err("wall size must be positive");
    }
    Ok(rect)
}

fn spawn_point(descriptor: &SpawnDescriptor, bounds: &Rect) -> Result<Vec2, &'static str> {
    let at = descriptor.center();
    if !at.is_finite() {
        return Err("size is not finite");
    }
    if !bounds.contains(at) {
        return Err("spawn point lies outside the map");
    }
    Ok(at)
}

/// Spawn the player at `at` with full health and the starting weapon.
pub fn spawn_player(world: &mut World, at: Vec2, tuning: &Tuning) -> Entity {
    world.spawn((
        Player {
            weapon: tuning.starting_weapon,
            last_shot_ms: None,
            rot_speed: 0.0,
            damage_tint: None,
            heal_tint: None,
        },
        Position(at),
        Velocity::default(),
        HitBox(Rect::from_center(at, Vec2::splat(tuning.player_hit_size))),
        Facing(0.0),
        Health {
            current: tuning.player_health,
            max: tuning.player_health,
        },
        Sprite {
            key: SpriteKey::Player,
            size: Vec2::new(PLAYER_SPRITE_SIZE.0, PLAYER_SPRITE_SIZE.1),
        },
    ))
}

/// Spawn a mob chasing `target`, with a speed drawn from the tuning set.
pub fn spawn_mob(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Vec2,
    target: EntityId,
    tuning: &Tuning,
) -> Entity {
    let speed = tuning
        .mob_speeds
        .choose(rng)
        .copied()
        .unwrap_or(MOB_SPEEDS[0]);

    world.spawn((
        Mob {
            speed,
            acceleration: Vec2::ZERO,
            target,
        },
        Position(at),
        Velocity::default(),
        HitBox(Rect::from_center(at, Vec2::splat(tuning.mob_hit_size))),
        Facing(0.0),
        Health {
            current: tuning.mob_health,
            max: tuning.mob_health,
        },
        Sprite {
            key: SpriteKey::Mob,
            size: Vec2::new(MOB_SPRITE_SIZE.0, MOB_SPRITE_SIZE.1),
        },
    ))
}

pub fn spawn_item(world: &mut World, at: Vec2, kind: ItemKind, tuning: &Tuning) -> Entity {
    let size = Vec2::splat(tuning.item_size);
    world.spawn((
        Item {
            kind,
            bob_step: 0.0,
            bob_dir: 1.0,
        },
        Position(at),
        HitBox(Rect::from_center(at, size)),
        Sprite {
            key: SpriteKey::Item { kind },
            size,
        },
    ))
}

/// Components for one bullet leaving the barrel at `at`.
pub fn bullet_bundle(
    at: Vec2,
    velocity: Vec2,
    weapon: WeaponId,
    spec: &WeaponSpec,
    now_ms: f64,
) -> (Bullet, Position, Velocity, HitBox, Facing, Sprite) {
    let size = Vec2::splat(spec.bullet_size.side());
    (
        Bullet {
            weapon,
            damage: spec.damage,
            spawned_ms: now_ms,
            lifetime_ms: spec.bullet_lifetime_ms,
        },
        Position(at),
        Velocity(velocity),
        HitBox(Rect::from_center(at, size)),
        Facing(facing_of(velocity)),
        Sprite {
            key: SpriteKey::Bullet {
                size: spec.bullet_size,
            },
            size,
        },
    )
}

/// Components for a muzzle flash with a random size and art variant.
pub fn flash_bundle(
    at: Vec2,
    facing: f32,
    now_ms: f64,
    tuning: &Tuning,
    rng: &mut ChaCha8Rng,
) -> (MuzzleFlash, Position, Facing, Sprite) {
    let side = rng.gen_range(FLASH_SIZE_RANGE.0..=FLASH_SIZE_RANGE.1) as f32;
    let variant = rng.gen_range(0..FLASH_VARIANTS);
    (
        MuzzleFlash {
            spawned_ms: now_ms,
            duration_ms: tuning.flash_duration_ms,
        },
        Position(at),
        Facing(facing),
        Sprite {
            key: SpriteKey::MuzzleFlash { variant },
            size: Vec2::splat(side),
        },
    )
}
