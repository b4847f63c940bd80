//! Effects domain: short-lived visuals for gameplay effects.

mod systems;
mod visuals;


pub use systems::{EffectLifetime, EffectMotion};
pub use visuals::{Anchor, EffectVisual, collect_color, visual_for};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::effects::systems::{animate_effects, spawn_effect_visuals};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_effect_visuals, animate_effects)
                .chain()
                .after(GameplaySet::Cleanup),
        );
    }
}
