//! Collectible domain: pickup kinds and the one-shot collection rule.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{CollectColor, Effect, EffectSink, ProgressSink};
use crate::player::{PlayerState, PowerUpKind};

/// Score for a coin.
pub const COIN_VALUE: u32 = 10;
/// Pickups closer than this drift toward the player.
pub const MAGNET_RADIUS: f32 = 40.0;
/// Fraction of the gap closed per frame while attracted.
pub const MAGNET_PULL: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    Head,
    Body,
    Arms,
    Legs,
    PowerCore,
}

impl PartType {
    pub const ALL: [PartType; 5] = [
        PartType::Head,
        PartType::Body,
        PartType::Arms,
        PartType::Legs,
        PartType::PowerCore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartType::Head => "Head",
            PartType::Body => "Body",
            PartType::Arms => "Arms",
            PartType::Legs => "Legs",
            PartType::PowerCore => "Power Core",
        }
    }

    pub fn random(rng: &mut impl Rng) -> PartType {
        PartType::ALL[rng.random_range(0..PartType::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
}

impl Rarity {
    pub fn points(self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Rare => 100,
            Rarity::Epic => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// A part with no type rolls one when collected.
    RobotPart {
        part: Option<PartType>,
        rarity: Rarity,
    },
    Coin,
    PowerUp(PowerUpKind),
}

impl CollectibleKind {
    pub fn is_robot_part(&self) -> bool {
        matches!(self, CollectibleKind::RobotPart { .. })
    }

    pub fn flash(&self) -> CollectColor {
        match self {
            CollectibleKind::RobotPart { rarity, .. } => match rarity {
                Rarity::Common => CollectColor::Common,
                Rarity::Rare => CollectColor::Rare,
                Rarity::Epic => CollectColor::Epic,
            },
            CollectibleKind::Coin => CollectColor::Coin,
            CollectibleKind::PowerUp(_) => CollectColor::PowerUp,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            CollectibleKind::RobotPart { rarity, .. } => match rarity {
                Rarity::Common => Color::srgb_u8(0x88, 0x88, 0x88),
                Rarity::Rare => Color::srgb_u8(0x41, 0x69, 0xe1),
                Rarity::Epic => Color::srgb_u8(0x99, 0x32, 0xcc),
            },
            CollectibleKind::Coin => Color::srgb_u8(0xff, 0xd7, 0x00),
            CollectibleKind::PowerUp(kind) => match kind {
                PowerUpKind::FireBreath => Color::srgb_u8(0xff, 0x45, 0x00),
                PowerUpKind::UltraBlast => Color::srgb_u8(0x00, 0xff, 0xff),
                PowerUpKind::FlyMode => Color::srgb_u8(0x98, 0xfb, 0x98),
                PowerUpKind::Invincibility => Color::srgb_u8(0xff, 0xd7, 0x00),
                PowerUpKind::SpeedBoost => Color::srgb_u8(0xff, 0x14, 0x93),
            },
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            CollectibleKind::RobotPart { .. } => Vec2::splat(28.0),
            CollectibleKind::Coin => Vec2::splat(16.0),
            CollectibleKind::PowerUp(_) => Vec2::splat(24.0),
        }
    }
}

/// What a collection applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Part { part: PartType, rarity: Rarity },
    Coin { points: u32 },
    PowerUp(PowerUpKind),
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    collected: bool,
}

impl Collectible {
    pub fn new(kind: CollectibleKind) -> Self {
        Self {
            kind,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Apply the pickup. Returns `None` if it was already taken; otherwise makes
    /// exactly one progress or power-up call.
    pub fn collect<S>(
        &mut self,
        player: &mut PlayerState,
        sink: &mut S,
        rng: &mut impl Rng,
        power_up_duration: f32,
        at: Vec2,
    ) -> Option<Collection>
    where
        S: ProgressSink + EffectSink,
    {
        if self.collected {
            return None;
        }
        self.collected = true;

        let collection = match self.kind {
            CollectibleKind::RobotPart { part, rarity } => {
                let part = part.unwrap_or_else(|| PartType::random(rng));
                sink.add_inventory_item(part, rarity);
                info!("Collected {:?} {}", rarity, part.label());
                Collection::Part { part, rarity }
            }
            CollectibleKind::Coin => {
                sink.add_score(COIN_VALUE);
                debug!("Collected coin (+{})", COIN_VALUE);
                Collection::Coin { points: COIN_VALUE }
            }
            CollectibleKind::PowerUp(kind) => {
                player.activate_power_up(kind, power_up_duration, sink);
                Collection::PowerUp(kind)
            }
        };
        sink.play(Effect::Collected {
            at,
            color: self.kind.flash(),
        });
        Some(collection)
    }
}

/// One frame of magnet drift. Returns the new position.
pub fn magnet_step(position: Vec2, player: Vec2) -> Vec2 {
    if position.distance(player) < MAGNET_RADIUS {
        position + (player - position) * MAGNET_PULL
    } else {
        position
    }
}
