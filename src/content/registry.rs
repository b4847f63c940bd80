//! LevelCatalog resource providing lookups for loaded level layouts.

use bevy::prelude::*;

use super::data::LevelDef;

/// Every level known to the game, sorted by number.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
}

impl LevelCatalog {
    pub fn new(mut levels: Vec<LevelDef>) -> Self {
        levels.sort_by_key(|level| level.number);
        Self { levels }
    }

    pub fn get(&self, number: u32) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.number == number)
    }

    /// The level layout for `number`, or the plain fallback layout when it
    /// was not loaded.
    pub fn level_or_fallback(&self, number: u32) -> LevelDef {
        match self.get(number) {
            Some(level) => level.clone(),
            None => {
                warn!("No layout for level {}, using the fallback layout", number);
                LevelDef::fallback(number)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns a summary of loaded levels for logging.
    pub fn summary(&self) -> String {
        let names: Vec<String> = self
            .levels
            .iter()
            .map(|level| format!("{}: {}", level.number, level.name))
            .collect();
        format!("LevelCatalog loaded {} levels [{}]", self.len(), names.join(", "))
    }
}
