//! Player domain: tuning values.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every number that shapes how the player moves and fights. Loaded from
/// `assets/data/gameplay.ron`; missing fields keep their defaults.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub jump_velocity: f32,
    pub double_jump_velocity: f32,
    pub coyote_time: f32,
    pub jump_cooldown: f32,
    /// Per-frame horizontal velocity multiplier with no input.
    pub friction: f32,
    pub max_health: f32,

    pub kick_cooldown: f32,
    pub kick_range: f32,
    pub kick_damage: f32,
    pub kick_knockback: f32,
    pub punch_cooldown: f32,
    pub punch_range: f32,
    pub punch_damage: f32,
    pub combo_window: f32,

    pub fire_breath_cooldown: f32,
    pub fire_breath_range: f32,
    pub fire_breath_damage: f32,
    pub ultra_blast_cooldown: f32,
    pub ultra_blast_radius: f32,
    pub ultra_blast_damage: f32,
    /// Horizontal scale of the blast push.
    pub ultra_blast_knockback_x: f32,
    /// Vertical scale of the blast push.
    pub ultra_blast_knockback_y: f32,
    pub ultra_blast_min_combo: u32,

    pub power_up_duration: f32,
    pub speed_boost: f32,
    pub fly_vertical_factor: f32,
    pub fly_hover_damping: f32,
    pub fly_gravity_scale: f32,

    /// Damage taken when falling out of the level.
    pub fall_damage: f32,
    /// Hit box size before costume scaling.
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            jump_velocity: 600.0,
            double_jump_velocity: 550.0,
            coyote_time: 0.15,
            jump_cooldown: 0.1,
            friction: 0.8,
            max_health: 100.0,

            kick_cooldown: 0.4,
            kick_range: 40.0,
            kick_damage: 30.0,
            kick_knockback: 150.0,
            punch_cooldown: 0.3,
            punch_range: 30.0,
            punch_damage: 20.0,
            combo_window: 1.0,

            fire_breath_cooldown: 3.0,
            fire_breath_range: 80.0,
            fire_breath_damage: 40.0,
            ultra_blast_cooldown: 5.0,
            ultra_blast_radius: 100.0,
            ultra_blast_damage: 50.0,
            ultra_blast_knockback_x: 300.0,
            ultra_blast_knockback_y: 200.0,
            ultra_blast_min_combo: 2,

            power_up_duration: 10.0,
            speed_boost: 1.5,
            fly_vertical_factor: 0.8,
            fly_hover_damping: 0.9,
            fly_gravity_scale: 0.25,

            fall_damage: 25.0,
            width: 28.0,
            height: 44.0,
        }
    }
}
