//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon identifier, the key into the weapon table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponId {
    #[default]
    Pistol,
    Shotgun,
}

impl WeaponId {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponId::Pistol => "pistol",
            WeaponId::Shotgun => "shotgun",
        }
    }
}

/// Visual size class of a bullet; also sets its hit box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletSize {
    #[default]
    Large,
    Small,
}

impl BulletSize {
    pub fn side(&self) -> f32 {
        match self {
            BulletSize::Large => crate::constants::BULLET_SIZE_LARGE,
            BulletSize::Small => crate::constants::BULLET_SIZE_SMALL,
        }
    }
}

/// What an item does when the player walks over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Restores health, only picked up when the player is hurt.
    Health,
    /// Switches the player's active weapon.
    Weapon { weapon: WeaponId },
}

/// Progress of a level run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Running,
    /// Every mob has been killed.
    Cleared,
    /// The player's health ran out.
    Defeated,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Running)
    }
}

/// Cosmetic tint applied over the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TintKind {
    Damage,
    Heal,
}

/// Sprite key handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "sprite", rename_all = "snake_case")]
pub enum SpriteKey {
    Player,
    Mob,
    Bullet { size: BulletSize },
    Item { kind: ItemKind },
    MuzzleFlash { variant: u8 },
}

/// Map object kinds accepted in spawn descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Player,
    Mob,
    Wall,
    Item(ItemKind),
}

impl std::str::FromStr for SpawnKind {
    type Err = ();

    /// Parse a map object name, as written by the level editor.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "player" => Ok(SpawnKind::Player),
            "zombie" | "mob" => Ok(SpawnKind::Mob),
            "wall" => Ok(SpawnKind::Wall),
            "health" => Ok(SpawnKind::Item(ItemKind::Health)),
            "shotgun" => Ok(SpawnKind::Item(ItemKind::Weapon {
                weapon: WeaponId::Shotgun,
            })),
            "pistol" => Ok(SpawnKind::Item(ItemKind::Weapon {
                weapon: WeaponId::Pistol,
            })),
            _ => Err(()),
        }
    }
}
