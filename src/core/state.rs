//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    LevelComplete,
    GameComplete,
}

/// Fixed per-frame order for gameplay systems.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum GameplaySet {
    /// Countdown timers advance.
    Cooldowns,
    /// Ground checks, locomotion and attack requests.
    Movement,
    /// Player attacks land and enemy AI decides.
    Decisions,
    /// Overlap dispatch: stomps, contact strikes, pickups.
    Collisions,
    /// Deaths, respawns, despawns, level completion.
    Cleanup,
}
