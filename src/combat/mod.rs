//! Combat domain: attack reach, the stomp-versus-strike contact resolver and
//! overlap dispatch.

mod melee;
mod resolver;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use melee::{Knockback, PlayerAttack, attack_on, reaches, strike_point};
pub use resolver::{
    ContactOutcome, ContactResolution, EnemyContact, PlayerContact, classify_contact,
    resolve_ai_strike, resolve_contact, strike_player,
};
pub use resources::{CombatTuning, StompCombo};

pub(crate) use systems::land_player_attacks;

use bevy::prelude::*;

use crate::combat::systems::{collect_pickups, resolve_enemy_contacts, tick_stomp_combo};
use crate::core::GameplaySet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<StompCombo>()
            .add_systems(Update, tick_stomp_combo.in_set(GameplaySet::Cooldowns))
            .add_systems(Update, land_player_attacks.in_set(GameplaySet::Decisions))
            .add_systems(
                Update,
                (resolve_enemy_contacts, collect_pickups)
                    .chain()
                    .in_set(GameplaySet::Collisions),
            );
    }
}
