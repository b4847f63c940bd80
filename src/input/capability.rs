//! Input domain: device-independent input queries and edge detection.

use bevy::prelude::*;

/// Axis threshold below which an analog value counts as centered.
pub const AXIS_DEADZONE: f32 = 0.1;

/// What gameplay may ask of an input device. Queries are level-sensed: they
/// report whether the action is held right now.
pub trait InputCapability {
    /// Horizontal axis in [-1, 1], right positive.
    fn horizontal(&self) -> f32;
    /// Vertical axis in [-1, 1], up positive.
    fn vertical(&self) -> f32;
    fn is_jump(&self) -> bool;
    fn is_kick(&self) -> bool;
    fn is_punch(&self) -> bool;

    fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.is_jump(),
            Action::Kick => self.is_kick(),
            Action::Punch => self.is_punch(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Kick,
    Punch,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Jump, Action::Kick, Action::Punch];

    fn index(self) -> usize {
        match self {
            Action::Jump => 0,
            Action::Kick => 1,
            Action::Punch => 2,
        }
    }
}

/// One frame's worth of sampled input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump: bool,
    pub kick: bool,
    pub punch: bool,
}

impl InputCapability for InputSnapshot {
    fn horizontal(&self) -> f32 {
        self.horizontal.clamp(-1.0, 1.0)
    }

    fn vertical(&self) -> f32 {
        self.vertical.clamp(-1.0, 1.0)
    }

    fn is_jump(&self) -> bool {
        self.jump
    }

    fn is_kick(&self) -> bool {
        self.kick
    }

    fn is_punch(&self) -> bool {
        self.punch
    }
}

/// Turns level-sensed buttons into rising edges by remembering the previous
/// frame.
///
/// Call [`observe`](Self::observe) exactly once per frame, then query
/// [`rising`](Self::rising) as often as needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdgeTracker {
    previous: [bool; 3],
    current: [bool; 3],
}

impl InputEdgeTracker {
    pub fn observe(&mut self, input: &impl InputCapability) {
        self.previous = self.current;
        for action in Action::ALL {
            self.current[action.index()] = input.is_held(action);
        }
    }

    /// Pressed this frame but not the previous one.
    pub fn rising(&self, action: Action) -> bool {
        let i = action.index();
        self.current[i] && !self.previous[i]
    }

    pub fn held(&self, action: Action) -> bool {
        self.current[action.index()]
    }

    /// Forget everything, e.g. after a respawn, so a held button does not
    /// count as a fresh press.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The input the player reads this frame. `None` means no device is ready and
/// the player skips movement and combat for the frame.
#[derive(Resource, Debug, Default)]
pub struct ActiveInput {
    pub snapshot: Option<InputSnapshot>,
    /// Frames in a row without a usable device.
    pub missing_frames: u32,
}
