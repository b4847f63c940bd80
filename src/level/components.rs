//! Level domain: markers and the loaded level's bookkeeping.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::core::Cooldown;

/// Seconds between finishing a level and loading the next one.
pub const LEVEL_COMPLETE_DELAY: f32 = 2.0;

/// Everything spawned for a level carries this, so unloading is one query.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Ground strips and floating platforms.
#[derive(Component, Debug)]
pub struct Platform;

/// Invisible side walls.
#[derive(Component, Debug)]
pub struct Wall;

/// The level currently loaded.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel {
    pub number: u32,
    pub name: String,
    pub spawn: Vec2,
    pub kill_y: f32,
    /// Robot parts placed in this load.
    pub parts_total: u32,
}

impl ActiveLevel {
    pub fn from_def(def: &LevelDef) -> Self {
        Self {
            number: def.number,
            name: def.name.clone(),
            spawn: def.spawn.to_vec2(),
            kill_y: def.kill_y,
            parts_total: def.parts.len() as u32,
        }
    }

    /// A level is done once every placed robot part has been collected.
    pub fn is_complete(&self, parts_collected: u32) -> bool {
        self.parts_total > 0 && parts_collected >= self.parts_total
    }

    pub fn is_out_of_bounds(&self, y: f32) -> bool {
        y < self.kill_y
    }
}

/// Delay before the next level loads.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelCompleteTimer {
    pub delay: Cooldown,
}

impl LevelCompleteTimer {
    pub fn start(&mut self) {
        self.delay.start(LEVEL_COMPLETE_DELAY);
    }

    /// True on the frame the delay runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.delay.tick(dt)
    }
}
