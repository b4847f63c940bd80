//! Data definitions for RON content files.
//!
//! All positions are world space, y up, with the origin at the bottom-left
//! corner of the level.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collectible::{PartType, Rarity};
use crate::combat::CombatTuning;
use crate::enemy::{EnemyFlavor, EnemyTuning};
use crate::player::{PlayerTuning, PowerUpKind};

/// Wrapper for list files: `(schema_version: 1, items: [...])`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Gameplay tuning (gameplay.ron)
// ============================================================================

/// Every tuning table in one file. Sections left out keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayFile {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub combat: CombatTuning,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A static platform, positioned by its centre.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PartPlacement {
    pub x: f32,
    pub y: f32,
    /// Left out to roll a random part type on pickup.
    #[serde(default)]
    pub part: Option<PartType>,
    #[serde(default)]
    pub rarity: Rarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PowerUpPlacement {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

/// A row of coins across the level, with some extra coins placed higher up at
/// random.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinRow {
    pub start_x: f32,
    pub spacing: f32,
    /// The row stops this far from the right edge.
    pub end_margin: f32,
    pub y: f32,
    pub elevated_offset_x: f32,
    pub elevated_y: f32,
    /// Chance in [0, 1] that a coin gets an elevated partner.
    pub elevated_chance: f64,
}

impl Default for CoinRow {
    fn default() -> Self {
        Self {
            start_x: 150.0,
            spacing: 200.0,
            end_margin: 150.0,
            y: 200.0,
            elevated_offset_x: 50.0,
            elevated_y: 300.0,
            elevated_chance: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub number: u32,
    pub name: String,
    pub flavor: EnemyFlavor,
    pub width: f32,
    pub height: f32,
    /// Top surface of the ground strip.
    pub ground_height: f32,
    pub spawn: Point,
    /// Falling below this y counts as out of bounds.
    pub kill_y: f32,
    pub platform_color: [u8; 3],
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub enemies: Vec<Point>,
    #[serde(default)]
    pub parts: Vec<PartPlacement>,
    #[serde(default)]
    pub power_ups: Vec<PowerUpPlacement>,
    #[serde(default)]
    pub coins: CoinRow,
}

impl LevelDef {
    /// Plain layout used when `levels.ron` has nothing for `number`: ground,
    /// four titans and five robot parts.
    pub fn fallback(number: u32) -> Self {
        let part = |x: f32, y: f32, rarity: Rarity| PartPlacement {
            x,
            y,
            part: None,
            rarity,
        };
        Self {
            number,
            name: format!("Level {}", number),
            flavor: EnemyFlavor::for_level(number),
            width: 2048.0,
            height: 576.0,
            ground_height: 64.0,
            spawn: Point::new(100.0, 150.0),
            kill_y: -100.0,
            platform_color: [0xb0, 0xe0, 0xe6],
            platforms: Vec::new(),
            enemies: [400.0, 800.0, 1200.0, 1600.0]
                .into_iter()
                .map(|x| Point::new(x, 150.0))
                .collect(),
            parts: vec![
                part(300.0, 216.0, Rarity::Common),
                part(700.0, 316.0, Rarity::Rare),
                part(1200.0, 416.0, Rarity::Common),
                part(1500.0, 316.0, Rarity::Common),
                part(1800.0, 266.0, Rarity::Epic),
            ],
            power_ups: Vec::new(),
            coins: CoinRow::default(),
        }
    }

    pub fn platform_color(&self) -> Color {
        let [r, g, b] = self.platform_color;
        Color::srgb_u8(r, g, b)
    }

    /// Coin positions for one load of this level. The elevated coins depend on
    /// `rng`.
    pub fn coin_positions(&self, rng: &mut impl Rng) -> Vec<Vec2> {
        let row = &self.coins;
        let mut positions = Vec::new();
        if row.spacing <= 0.0 {
            return positions;
        }
        let mut x = row.start_x;
        while x < self.width - row.end_margin {
            positions.push(Vec2::new(x, row.y));
            if rng.random_bool(row.elevated_chance.clamp(0.0, 1.0)) {
                positions.push(Vec2::new(x + row.elevated_offset_x, row.elevated_y));
            }
            x += row.spacing;
        }
        positions
    }
}
