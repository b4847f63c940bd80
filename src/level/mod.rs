//! Level domain: level loading, falls, respawns and the level-complete flow.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ActiveLevel, LEVEL_COMPLETE_DELAY, LevelCompleteTimer, LevelEntity, Platform, Wall,
};

use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::level::systems::{
    advance_after_delay, catch_falls, despawn_collected, despawn_level, detect_level_complete,
    freeze_level, respawn_fallen_player, spawn_level,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelCompleteTimer>()
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(
                Update,
                (
                    catch_falls,
                    respawn_fallen_player,
                    despawn_collected,
                    detect_level_complete,
                )
                    .chain()
                    .in_set(GameplaySet::Cleanup),
            )
            .add_systems(OnEnter(GameState::LevelComplete), freeze_level)
            .add_systems(
                Update,
                advance_after_delay.run_if(in_state(GameState::LevelComplete)),
            )
            .add_systems(OnExit(GameState::LevelComplete), despawn_level);
    }
}
