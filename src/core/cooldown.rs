//! Core domain: frame-delta countdowns shared by every gameplay timer.

/// A countdown in seconds, decremented by the frame delta.
///
/// A cooldown is "ready" once its remaining time reaches zero. Every timer in
/// the game (attack gates, combo windows, stun, power-up expiry, death delay)
/// is one of these so the whole simulation advances from a single `dt`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    /// A cooldown that is already elapsed.
    pub const fn ready() -> Self {
        Self { remaining: 0.0 }
    }

    /// A cooldown that starts running immediately.
    pub fn running(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
        }
    }

    /// (Re)start the countdown. Restarting replaces the old deadline.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    /// Advance by `dt`. Returns true only on the tick where the countdown
    /// crosses from running to elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}
