//! Collectible domain: robot parts, coins and power-ups.

mod components;
mod systems;


pub use components::{
    COIN_VALUE, Collectible, CollectibleKind, Collection, MAGNET_PULL, MAGNET_RADIUS, PartType,
    Rarity, magnet_step,
};
pub use systems::CollectibleBundle;

use bevy::prelude::*;

use crate::collectible::systems::attract_collectibles;
use crate::core::GameplaySet;

pub struct CollectiblePlugin;

impl Plugin for CollectiblePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, attract_collectibles.in_set(GameplaySet::Movement));
    }
}
