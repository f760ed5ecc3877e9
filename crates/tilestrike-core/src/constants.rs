//! Simulation constants and default tuning parameters.
//!
//! Distances are world units (pixels at 1:1 zoom), times are milliseconds
//! unless the name says otherwise, angles are degrees.

/// Nominal simulation step rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per step at the nominal rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest delta accepted by one step before clamping (seconds).
pub const MAX_STEP_SECS: f32 = 0.1;

/// Minimum penetration for two rectangles to count as overlapping.
pub const CONTACT_EPSILON: f32 = 1e-3;

// --- Viewport ---

pub const VIEWPORT_WIDTH: f32 = 1024.0;
pub const VIEWPORT_HEIGHT: f32 = 768.0;

/// Side of one map tile.
pub const TILE_SIZE: f32 = 64.0;

// --- Player ---

pub const PLAYER_HEALTH: i32 = 100;

/// Forward speed at full throttle (units/s). Reverse runs at half this.
pub const PLAYER_SPEED: f32 = 300.0;

/// Turn rate at full input (degrees/s).
pub const PLAYER_ROT_SPEED: f32 = 250.0;

pub const PLAYER_HIT_SIZE: f32 = 35.0;

/// Visual sprite bounds of the player (unrotated).
pub const PLAYER_SPRITE_SIZE: (f32, f32) = (49.0, 43.0);

/// Muzzle position relative to the player center when facing 0 degrees.
pub const BARREL_OFFSET: (f32, f32) = (25.0, 10.0);

// --- Mobs ---

pub const MOB_HEALTH: i32 = 100;

/// Speed set a mob picks from at spawn (units/s).
pub const MOB_SPEEDS: [f32; 4] = [150.0, 100.0, 75.0, 125.0];

pub const MOB_HIT_SIZE: f32 = 30.0;

pub const MOB_SPRITE_SIZE: (f32, f32) = (35.0, 43.0);

/// Contact damage dealt to the player per overlapping mob per step.
pub const MOB_DAMAGE: i32 = 10;

/// Distance the player is shoved when a mob touches it.
pub const MOB_KNOCKBACK: f32 = 20.0;

/// Mobs closer than this push away from each other.
pub const MOB_AVOID_RADIUS: f32 = 50.0;

/// Mobs start pursuing inside this radius.
pub const MOB_DETECT_RADIUS: f32 = 400.0;

/// Chance per step that a pursuing mob growls.
pub const MOB_GROWL_CHANCE: f64 = 0.002;

// --- Weapons ---

pub const PISTOL_BULLET_SPEED: f32 = 500.0;
pub const PISTOL_BULLET_LIFETIME_MS: f64 = 1000.0;
pub const PISTOL_FIRE_RATE_MS: f64 = 250.0;
pub const PISTOL_KICKBACK: f32 = 200.0;
pub const PISTOL_SPREAD_DEG: f32 = 5.0;
pub const PISTOL_DAMAGE: i32 = 10;
pub const PISTOL_BULLET_COUNT: u32 = 1;

pub const SHOTGUN_BULLET_SPEED: f32 = 400.0;
pub const SHOTGUN_BULLET_LIFETIME_MS: f64 = 500.0;
pub const SHOTGUN_FIRE_RATE_MS: f64 = 900.0;
pub const SHOTGUN_KICKBACK: f32 = 300.0;
pub const SHOTGUN_SPREAD_DEG: f32 = 20.0;
pub const SHOTGUN_DAMAGE: i32 = 10;
pub const SHOTGUN_BULLET_COUNT: u32 = 12;

/// Bullet speed jitter range, applied multiplicatively at spawn.
pub const BULLET_SPEED_JITTER: (f32, f32) = (0.9, 1.1);

pub const BULLET_SIZE_LARGE: f32 = 20.0;
pub const BULLET_SIZE_SMALL: f32 = 10.0;

// --- Effects ---

pub const FLASH_DURATION_MS: f64 = 40.0;

/// Visual size range of a muzzle flash, inclusive.
pub const FLASH_SIZE_RANGE: (u32, u32) = (20, 50);

/// Number of muzzle-flash sprite variants.
pub const FLASH_VARIANTS: u8 = 4;

/// Alpha ramp of the damage/heal tint, one value per step.
pub const TINT_ALPHA_STEP: u8 = 25;

/// Times the alpha ramp repeats before a tint ends.
pub const TINT_REPEATS: usize = 2;

// --- Items ---

pub const HEALTH_PACK_AMOUNT: i32 = 20;

pub const ITEM_SIZE: f32 = 32.0;

/// Vertical bob amplitude of a resting item.
pub const BOB_RANGE: f32 = 15.0;

/// Bob phase advance per step.
pub const BOB_SPEED: f32 = 0.4;
