//! Enemy domain: titan AI, damage handling and flavors.

mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{EnemyFlavor, EnemyTuning, EnemyVariant};
pub use state::{AiState, Enemy, EnemyHit, EnemyIntent, EnemySenses, EnemyState, EnemyStats};
pub use systems::EnemyBundle;

use bevy::prelude::*;

use crate::combat::land_player_attacks;
use crate::core::GameplaySet;
use crate::enemy::systems::{
    detect_enemy_ground, remove_defeated_enemies, run_enemy_ai, tint_enemies,
};

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(Update, detect_enemy_ground.in_set(GameplaySet::Movement))
            .add_systems(
                Update,
                run_enemy_ai
                    .after(land_player_attacks)
                    .in_set(GameplaySet::Decisions),
            )
            .add_systems(
                Update,
                (remove_defeated_enemies, tint_enemies).in_set(GameplaySet::Cleanup),
            );
    }
}
