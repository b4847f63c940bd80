//! Core domain: startup, persistence and camera systems.

use bevy::prelude::*;

use crate::core::persistence::{JsonFileStore, SaveStore};
use crate::core::resources::{GameRng, Progress};
use crate::core::state::GameState;
use crate::player::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Load the save file into `Progress`. A missing or broken save starts fresh.
pub(crate) fn load_progress(store: Res<JsonFileStore>, mut progress: ResMut<Progress>) {
    match store.load() {
        Ok(Some(data)) => {
            *progress = Progress::from_save(data);
            info!(
                "Loaded save: level {}, score {}, {} parts",
                progress.current_level,
                progress.score,
                progress.total_parts()
            );
        }
        Ok(None) => info!("No save file at {}, starting fresh", store.path().display()),
        Err(e) => warn!("{}; starting fresh", e),
    }
}

pub(crate) fn log_run_seed(rng: Res<GameRng>) {
    info!("Gameplay RNG seed: {}", rng.seed);
}

pub(crate) fn enter_first_level(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// Persist progress. Failures are logged, never fatal.
pub(crate) fn write_save(store: &mut JsonFileStore, progress: &Progress) {
    match store.save(&progress.to_save()) {
        Ok(()) => debug!("Saved progress to {}", store.path().display()),
        Err(e) => error!("{}", e),
    }
}

pub(crate) fn camera_follow_player(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let target = player_transform.translation.truncate();
    for mut camera in &mut camera_query {
        let current = camera.translation.truncate();
        let next = current.lerp(target, 0.1);
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}
