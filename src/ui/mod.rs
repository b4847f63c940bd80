//! UI domain: HUD elements and level flow overlays.

mod banners;
mod hud_enemy;
mod hud_player;
mod hud_score;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::banners::{
    announce_unlocks, cleanup_level_complete_banner, fade_unlock_notices,
    spawn_game_complete_banner, spawn_level_complete_banner,
};
use crate::ui::hud_enemy::{spawn_enemy_healthbars, update_enemy_healthbars};
use crate::ui::hud_player::{spawn_player_healthbar_ui, update_player_healthbar};
use crate::ui::hud_score::{spawn_score_display_ui, update_power_up_display, update_score_display};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_player_healthbar_ui, spawn_score_display_ui))
            .add_systems(
                Update,
                (
                    update_player_healthbar,
                    update_score_display,
                    update_power_up_display,
                    spawn_enemy_healthbars,
                    update_enemy_healthbars,
                    announce_unlocks,
                    fade_unlock_notices,
                ),
            )
            .add_systems(OnEnter(GameState::LevelComplete), spawn_level_complete_banner)
            .add_systems(OnExit(GameState::LevelComplete), cleanup_level_complete_banner)
            .add_systems(OnEnter(GameState::GameComplete), spawn_game_complete_banner);
    }
}
