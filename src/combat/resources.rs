//! Combat domain: stomp tuning and the stomp combo tracker.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::Cooldown;

/// Head-stomp rules. Loaded from `assets/data/gameplay.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// The player must be this much higher than the enemy's centre.
    pub stomp_height: f32,
    /// The player must be falling faster than this.
    pub stomp_fall_speed: f32,
    /// Maximum horizontal centre distance for a stomp.
    pub stomp_width: f32,
    pub stomp_bounce: f32,
    pub stomp_damage: f32,
    pub stomp_points: u32,
    pub stomp_max_multiplier: u32,
    /// The stomp combo resets after this long without a stomp.
    pub stomp_combo_window: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            stomp_height: 15.0,
            stomp_fall_speed: 50.0,
            stomp_width: 35.0,
            stomp_bounce: 350.0,
            stomp_damage: 75.0,
            stomp_points: 100,
            stomp_max_multiplier: 5,
            stomp_combo_window: 2.0,
        }
    }
}

/// Consecutive stomps. Each stomp restarts the window.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct StompCombo {
    pub count: u32,
    window: Cooldown,
}

impl StompCombo {
    /// Count a stomp and return the points it is worth.
    pub fn register(&mut self, tuning: &CombatTuning) -> u32 {
        self.count += 1;
        self.window.start(tuning.stomp_combo_window);
        tuning.stomp_points * self.count.min(tuning.stomp_max_multiplier)
    }

    pub fn tick(&mut self, dt: f32) {
        if self.window.tick(dt) {
            debug!("Stomp combo reset after {}", self.count);
            self.count = 0;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.window.clear();
    }
}
