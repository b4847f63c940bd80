//! Core domain: shared resources for progress tracking and randomness.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::collectible::{PartType, Rarity};
use crate::core::persistence::{CollectedPart, Outfits, SaveData, Settings};
use crate::core::sinks::ProgressSink;
use crate::player::CostumeId;

/// Number of hand-authored levels; finishing this one completes the game.
pub const FINAL_LEVEL: u32 = 5;

/// Extra damage reported against the level on every player respawn.
pub const DEATH_PENALTY: f32 = 50.0;

/// Outcome of finishing a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    Next(u32),
    GameComplete,
}

/// The game's progress tracker. This is the only writer of persisted state;
/// gameplay code reaches it through [`ProgressSink`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Progress {
    pub current_level: u32,
    pub score: u64,
    pub robot_parts: Vec<CollectedPart>,
    pub outfits: Outfits,
    pub settings: Settings,
    /// Damage taken in the current level, deaths included.
    pub damage_taken: f32,
    /// Robot parts picked up in the current level.
    pub parts_this_level: u32,
    /// Costumes unlocked since the HUD last acknowledged them.
    pub fresh_unlocks: Vec<CostumeId>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::from_save(SaveData::default())
    }
}

impl Progress {
    pub fn from_save(data: SaveData) -> Self {
        let mut outfits = data.outfits;
        if !outfits.unlocked.contains(&CostumeId::Default) {
            outfits.unlocked.insert(0, CostumeId::Default);
        }
        if !outfits.unlocked.contains(&outfits.current) {
            outfits.current = CostumeId::Default;
        }
        Self {
            current_level: data.current_level.clamp(1, FINAL_LEVEL),
            score: data.score,
            robot_parts: data.robot_parts,
            outfits,
            settings: data.settings,
            damage_taken: 0.0,
            parts_this_level: 0,
            fresh_unlocks: Vec::new(),
        }
    }

    pub fn to_save(&self) -> SaveData {
        SaveData {
            current_level: self.current_level,
            score: self.score,
            robot_parts: self.robot_parts.clone(),
            outfits: self.outfits.clone(),
            settings: self.settings.clone(),
        }
    }

    pub fn part_count(&self, part: PartType) -> usize {
        self.robot_parts.iter().filter(|p| p.part == part).count()
    }

    pub fn total_parts(&self) -> usize {
        self.robot_parts.len()
    }

    /// True once at least one of every part type is in the inventory.
    pub fn has_every_part_type(&self) -> bool {
        PartType::ALL.iter().all(|part| self.part_count(*part) > 0)
    }

    pub fn is_unlocked(&self, costume: CostumeId) -> bool {
        self.outfits.unlocked.contains(&costume)
    }

    /// Returns true if the costume was newly unlocked.
    pub fn unlock_costume(&mut self, costume: CostumeId) -> bool {
        if self.is_unlocked(costume) {
            return false;
        }
        self.outfits.unlocked.push(costume);
        self.fresh_unlocks.push(costume);
        info!("Unlocked costume: {}", costume.name());
        true
    }

    /// Applies every unlock rule against current progress.
    pub fn check_costume_unlocks(&mut self) -> Vec<CostumeId> {
        let level = self.current_level;
        let total = self.total_parts();
        let all_types = self.has_every_part_type();
        CostumeId::ALL
            .into_iter()
            .filter(|costume| costume.unlocked_by(level, total, all_types))
            .filter(|costume| self.unlock_costume(*costume))
            .collect()
    }

    /// Switch the worn costume. Locked costumes are refused.
    pub fn select_costume(&mut self, costume: CostumeId) -> bool {
        if !self.is_unlocked(costume) {
            return false;
        }
        self.outfits.current = costume;
        true
    }

    pub fn current_costume(&self) -> CostumeId {
        self.outfits.current
    }

    /// Reset the per-level counters when a level is loaded.
    pub fn start_level(&mut self) {
        self.damage_taken = 0.0;
        self.parts_this_level = 0;
    }

    /// Move past the current level.
    pub fn advance_level(&mut self) -> LevelAdvance {
        self.current_level += 1;
        self.check_costume_unlocks();
        if self.current_level > FINAL_LEVEL {
            self.current_level = FINAL_LEVEL;
            LevelAdvance::GameComplete
        } else {
            LevelAdvance::Next(self.current_level)
        }
    }
}

impl ProgressSink for Progress {
    fn add_score(&mut self, points: u32) {
        self.score += u64::from(points);
    }

    fn add_inventory_item(&mut self, part: PartType, rarity: Rarity) {
        self.robot_parts.push(CollectedPart { part, rarity });
        self.parts_this_level += 1;
        self.add_score(rarity.points());
        self.check_costume_unlocks();
        debug!(
            "Inventory: {:?} {:?} (+{} points), {} parts total",
            rarity,
            part,
            rarity.points(),
            self.total_parts()
        );
    }

    fn on_player_damage(&mut self, amount: f32) {
        self.damage_taken += amount;
    }
}

/// Seeded RNG for gameplay rolls (random part types, coin placement).
#[derive(Resource, Debug)]
pub struct GameRng {
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}
