//! Player domain: timed power-ups.

use serde::{Deserialize, Serialize};

use crate::core::Cooldown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    FireBreath,
    UltraBlast,
    FlyMode,
    Invincibility,
    SpeedBoost,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::FireBreath,
        PowerUpKind::UltraBlast,
        PowerUpKind::FlyMode,
        PowerUpKind::Invincibility,
        PowerUpKind::SpeedBoost,
    ];

    fn index(self) -> usize {
        match self {
            PowerUpKind::FireBreath => 0,
            PowerUpKind::UltraBlast => 1,
            PowerUpKind::FlyMode => 2,
            PowerUpKind::Invincibility => 3,
            PowerUpKind::SpeedBoost => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::FireBreath => "Fire Breath",
            PowerUpKind::UltraBlast => "Ultra Blast",
            PowerUpKind::FlyMode => "Fly",
            PowerUpKind::Invincibility => "Invincible",
            PowerUpKind::SpeedBoost => "Speed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpActivation {
    Started,
    /// Already active; the window restarted from full.
    Refreshed,
}

/// One countdown per power-up. A power-up is active exactly while its
/// countdown is running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerUps {
    timers: [Cooldown; 5],
}

impl PowerUps {
    pub fn activate(&mut self, kind: PowerUpKind, duration: f32) -> PowerUpActivation {
        let timer = &mut self.timers[kind.index()];
        let outcome = if timer.is_running() {
            PowerUpActivation::Refreshed
        } else {
            PowerUpActivation::Started
        };
        timer.start(duration);
        outcome
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.timers[kind.index()].is_running()
    }

    pub fn remaining(&self, kind: PowerUpKind) -> f32 {
        self.timers[kind.index()].remaining()
    }

    /// Advance every countdown; returns the kinds that ran out this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<PowerUpKind> {
        PowerUpKind::ALL
            .into_iter()
            .filter(|kind| self.timers[kind.index()].tick(dt))
            .collect()
    }

    pub fn active(&self) -> impl Iterator<Item = PowerUpKind> + '_ {
        PowerUpKind::ALL
            .into_iter()
            .filter(|kind| self.is_active(*kind))
    }

    pub fn clear(&mut self) {
        self.timers = Default::default();
    }
}
