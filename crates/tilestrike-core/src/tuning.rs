//! Gameplay tuning: every number a designer may want to override.
//!
//! Defaults come from `constants.rs`. Overrides are read from TOML; any
//! field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BulletSize, WeaponId};
use crate::error::ConfigError;

/// Static weapon configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub bullet_speed: f32,
    pub bullet_lifetime_ms: f64,
    /// Minimum interval between trigger pulls.
    pub fire_rate_ms: f64,
    pub kickback: f32,
    /// Half-angle of the random spread cone (degrees).
    pub spread_deg: f32,
    pub damage: i32,
    pub bullet_count: u32,
    pub bullet_size: BulletSize,
}

impl WeaponSpec {
    pub fn pistol() -> Self {
        Self {
            bullet_speed: PISTOL_BULLET_SPEED,
            bullet_lifetime_ms: PISTOL_BULLET_LIFETIME_MS,
            fire_rate_ms: PISTOL_FIRE_RATE_MS,
            kickback: PISTOL_KICKBACK,
            spread_deg: PISTOL_SPREAD_DEG,
            damage: PISTOL_DAMAGE,
            bullet_count: PISTOL_BULLET_COUNT,
            bullet_size: BulletSize::Large,
        }
    }

    pub fn shotgun() -> Self {
        Self {
            bullet_speed: SHOTGUN_BULLET_SPEED,
            bullet_lifetime_ms: SHOTGUN_BULLET_LIFETIME_MS,
            fire_rate_ms: SHOTGUN_FIRE_RATE_MS,
            kickback: SHOTGUN_KICKBACK,
            spread_deg: SHOTGUN_SPREAD_DEG,
            damage: SHOTGUN_DAMAGE,
            bullet_count: SHOTGUN_BULLET_COUNT,
            bullet_size: BulletSize::Small,
        }
    }
}

/// Weapon table keyed by `WeaponId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arsenal {
    pub pistol: WeaponSpec,
    pub shotgun: WeaponSpec,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self {
            pistol: WeaponSpec::pistol(),
            shotgun: WeaponSpec::shotgun(),
        }
    }
}

impl Arsenal {
    pub fn spec(&self, weapon: WeaponId) -> &WeaponSpec {
        match weapon {
            WeaponId::Pistol => &self.pistol,
            WeaponId::Shotgun => &self.shotgun,
        }
    }
}

/// All gameplay numbers used by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub max_step_secs: f32,

    pub player_health: i32,
    pub player_speed: f32,
    pub player_rot_speed: f32,
    pub player_hit_size: f32,
    pub barrel_offset: [f32; 2],
    pub starting_weapon: WeaponId,

    pub mob_health: i32,
    pub mob_speeds: Vec<f32>,
    pub mob_hit_size: f32,
    pub mob_damage: i32,
    pub mob_knockback: f32,
    pub mob_avoid_radius: f32,
    pub mob_detect_radius: f32,
    pub mob_growl_chance: f64,

    pub flash_duration_ms: f64,
    pub health_pack_amount: i32,
    pub item_size: f32,
    pub bob_range: f32,
    pub bob_speed: f32,

    pub weapons: Arsenal,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_step_secs: MAX_STEP_SECS,
            player_health: PLAYER_HEALTH,
            player_speed: PLAYER_SPEED,
            player_rot_speed: PLAYER_ROT_SPEED,
            player_hit_size: PLAYER_HIT_SIZE,
            barrel_offset: [BARREL_OFFSET.0, BARREL_OFFSET.1],
            starting_weapon: WeaponId::Pistol,
            mob_health: MOB_HEALTH,
            mob_speeds: MOB_SPEEDS.to_vec(),
            mob_hit_size: MOB_HIT_SIZE,
            mob_damage: MOB_DAMAGE,
            mob_knockback: MOB_KNOCKBACK,
            mob_avoid_radius: MOB_AVOID_RADIUS,
            mob_detect_radius: MOB_DETECT_RADIUS,
            mob_growl_chance: MOB_GROWL_CHANCE,
            flash_duration_ms: FLASH_DURATION_MS,
            health_pack_amount: HEALTH_PACK_AMOUNT,
            item_size: ITEM_SIZE,
            bob_range: BOB_RANGE,
            bob_speed: BOB_SPEED,
            weapons: Arsenal::default(),
        }
    }
}

impl Tuning {
    /// Parse TOML overrides on top of the defaults, then validate.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_step_secs", self.max_step_secs)?;
        positive("player_health", self.player_health as f32)?;
        positive("player_speed", self.player_speed)?;
        positive("player_hit_size", self.player_hit_size)?;
        positive("mob_health", self.mob_health as f32)?;
        positive("mob_hit_size", self.mob_hit_size)?;
        positive("item_size", self.item_size)?;
        positive("bob_range", self.bob_range)?;

        if self.mob_speeds.is_empty() {
            return Err(ConfigError::Invalid {
                field: "mob_speeds",
                reason: "at least one speed is required".into(),
            });
        }
        if self.mob_speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(ConfigError::Invalid {
                field: "mob_speeds",
                reason: "speeds must be finite and non-negative".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.mob_growl_chance) {
            return Err(ConfigError::Invalid {
                field: "mob_growl_chance",
                reason: format!("{} is not a probability", self.mob_growl_chance),
            });
        }

        for (field, spec) in [
            ("weapons.pistol", &self.weapons.pistol),
            ("weapons.shotgun", &self.weapons.shotgun),
        ] {
            if spec.bullet_count == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "bullet_count must be at least 1".into(),
                });
            }
            let speed_ok = spec.bullet_speed.is_finite() && spec.bullet_speed > 0.0;
            let rate_ok = spec.fire_rate_ms.is_finite() && spec.fire_rate_ms >= 0.0;
            if !speed_ok || !rate_ok {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "bullet_speed must be positive and fire_rate_ms non-negative".into(),
                });
            }
            if !spec.spread_deg.is_finite() || spec.spread_deg < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "spread_deg must be finite and non-negative".into(),
                });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be positive"),
        })
    }
}
