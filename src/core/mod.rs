//! Core domain: game state, frame ordering, progress and shared utilities.

mod cooldown;
mod persistence;
mod physics;
mod resources;
mod sinks;
mod state;
mod systems;


pub use cooldown::Cooldown;
pub use persistence::{
    CollectedPart, JsonFileStore, Outfits, SaveData, SaveError, SaveStore, Settings,
};
pub use physics::{Extent, GameLayer};
pub use resources::{DEATH_PENALTY, FINAL_LEVEL, GameRng, LevelAdvance, Progress};
pub use sinks::{CollectColor, Effect, EffectSink, Feedback, ProgressSink};
pub use state::{GameState, GameplaySet};

#[cfg(test)]
pub(crate) use persistence::MemoryStore;
#[cfg(test)]
pub(crate) use sinks::RecordingSink;

pub(crate) use systems::write_save;

use bevy::prelude::*;

use crate::core::systems::{
    camera_follow_player, enter_first_level, load_progress, log_run_seed, setup_camera,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Progress>()
            .add_message::<Effect>()
            .init_resource::<GameRng>()
            .init_resource::<JsonFileStore>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Cooldowns,
                    GameplaySet::Movement,
                    GameplaySet::Decisions,
                    GameplaySet::Collisions,
                    GameplaySet::Cleanup,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Startup,
                (setup_camera, load_progress, log_run_seed, enter_first_level).chain(),
            )
            .add_systems(PostUpdate, camera_follow_player);
    }
}
