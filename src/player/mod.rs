//! Player domain: movement, combat and power-up state, and its ECS drivers.

mod costume;
mod powerups;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use costume::{CostumeId, CostumeVariant};
pub use powerups::{PowerUpActivation, PowerUpKind, PowerUps};
pub use resources::PlayerTuning;
pub use state::{AttackKind, Facing, GroundChange, JumpOutcome, Player, PlayerDamage, PlayerState};
pub use systems::PlayerBundle;

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::player::systems::{detect_ground, drive_player, tick_player, tint_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .add_systems(Update, tick_player.in_set(GameplaySet::Cooldowns))
            .add_systems(
                Update,
                (detect_ground, drive_player)
                    .chain()
                    .in_set(GameplaySet::Movement),
            )
            .add_systems(Update, tint_player.in_set(GameplaySet::Cleanup));
    }
}
