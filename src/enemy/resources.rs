//! Enemy domain: tuning values and level flavors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Base numbers for a titan before its flavor is applied. Loaded from
/// `assets/data/gameplay.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub health: f32,
    pub speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    /// Cooldown between strikes.
    pub attack_delay: f32,
    /// Patrol runs from the spawn x to spawn x plus this.
    pub patrol_distance: f32,
    pub patrol_speed_factor: f32,
    /// Chase gives up beyond `detection_range` times this.
    pub give_up_factor: f32,
    pub stun_duration: f32,
    pub chase_jump_velocity: f32,
    /// How much higher the player must be before a chasing enemy jumps.
    pub chase_jump_height: f32,
    /// Horizontal speed a strike gives the player.
    pub strike_knockback: f32,
    pub kill_bonus: u32,
    /// Time a defeated enemy lingers before removal.
    pub death_delay: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            health: 60.0,
            speed: 80.0,
            damage: 20.0,
            attack_range: 50.0,
            detection_range: 200.0,
            attack_delay: 1.5,
            patrol_distance: 200.0,
            patrol_speed_factor: 0.5,
            give_up_factor: 1.5,
            stun_duration: 1.0,
            chase_jump_velocity: 300.0,
            chase_jump_height: 50.0,
            strike_knockback: 200.0,
            kill_bonus: 100,
            death_delay: 0.5,
            width: 44.0,
            height: 60.0,
        }
    }
}

/// Level theme for titans. Flavors only scale stats at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnemyFlavor {
    #[default]
    Titan,
    Ice,
    Fire,
    Power,
    Lightning,
    Shadow,
}

impl EnemyFlavor {
    /// The flavor used by each of the five levels.
    pub fn for_level(level: u32) -> EnemyFlavor {
        match level {
            1 => EnemyFlavor::Ice,
            2 => EnemyFlavor::Fire,
            3 => EnemyFlavor::Power,
            4 => EnemyFlavor::Lightning,
            5 => EnemyFlavor::Shadow,
            _ => EnemyFlavor::Titan,
        }
    }

    pub fn variant(self) -> EnemyVariant {
        let base = EnemyVariant {
            health: 1.0,
            speed: 1.0,
            damage: 1.0,
            attack_delay: 1.0,
            detection: 1.0,
            color: Color::srgb_u8(0x4a, 0x4a, 0x4a),
        };
        match self {
            EnemyFlavor::Titan => base,
            EnemyFlavor::Ice => EnemyVariant {
                speed: 0.8,
                color: Color::srgb_u8(0x87, 0xce, 0xeb),
                ..base
            },
            EnemyFlavor::Fire => EnemyVariant {
                damage: 1.5,
                color: Color::srgb_u8(0xff, 0x63, 0x47),
                ..base
            },
            EnemyFlavor::Power => EnemyVariant {
                health: 2.0,
                color: Color::srgb_u8(0x93, 0x70, 0xdb),
                ..base
            },
            EnemyFlavor::Lightning => EnemyVariant {
                speed: 1.25,
                attack_delay: 0.75,
                color: Color::srgb_u8(0xff, 0xd7, 0x00),
                ..base
            },
            EnemyFlavor::Shadow => EnemyVariant {
                damage: 1.25,
                detection: 1.25,
                color: Color::srgb_u8(0x2f, 0x1b, 0x3c),
                ..base
            },
        }
    }
}

/// Stat multipliers and look for one flavor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyVariant {
    pub health: f32,
    pub speed: f32,
    pub damage: f32,
    pub attack_delay: f32,
    pub detection: f32,
    pub color: Color,
}
