//! Content domain: RON tuning and level layouts loaded at startup.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{
    CoinRow, DataFile, GameplayFile, LevelDef, PartPlacement, PlatformDef, Point,
    PowerUpPlacement,
};
pub use loader::{
    ContentLoadError, DATA_DIR, GAMEPLAY_FILE, LEVELS_FILE, load_gameplay, load_levels,
    parse_gameplay, parse_levels,
};
pub use registry::LevelCatalog;
pub use validation::{ValidationError, validate_level, validate_levels};

use bevy::prelude::*;
use std::path::Path;

use crate::core::FINAL_LEVEL;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelCatalog>()
            .add_systems(Startup, load_content);
    }
}

/// Read `assets/data/*.ron` into the tuning resources and the level catalog.
/// Anything that fails to load keeps its built-in defaults.
fn load_content(mut commands: Commands) {
    let base = Path::new(DATA_DIR);

    let gameplay = match load_gameplay(&base.join(GAMEPLAY_FILE)) {
        Ok(gameplay) => gameplay,
        Err(e) => {
            warn!("{}; using default tuning", e);
            GameplayFile::default()
        }
    };
    commands.insert_resource(gameplay.player);
    commands.insert_resource(gameplay.enemy);
    commands.insert_resource(gameplay.combat);

    let levels = match load_levels(&base.join(LEVELS_FILE)) {
        Ok(levels) => levels,
        Err(e) => {
            warn!("{}; using fallback level layouts", e);
            Vec::new()
        }
    };
    let catalog = LevelCatalog::new(keep_valid_levels(levels));
    info!("{}", catalog.summary());
    for number in 1..=FINAL_LEVEL {
        if catalog.get(number).is_none() {
            warn!(
                "Level {} missing from {}; it will use the fallback layout",
                number, LEVELS_FILE
            );
        }
    }
    commands.insert_resource(catalog);
}

/// Drop levels that fail validation, logging each problem. A level number
/// defined twice is dropped entirely.
fn keep_valid_levels(levels: Vec<LevelDef>) -> Vec<LevelDef> {
    let errors = validate_levels(&levels);
    for e in &errors {
        error!("{}", e);
    }
    levels
        .into_iter()
        .filter(|level| !errors.iter().any(|e| e.level == level.number))
        .collect()
}
