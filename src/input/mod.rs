//! Input domain: the capability interface gameplay reads, and the keyboard
//! adapter that fills it.

mod capability;
mod systems;

#[cfg(test)]
mod tests;

pub use capability::{
    AXIS_DEADZONE, Action, ActiveInput, InputCapability, InputEdgeTracker, InputSnapshot,
};
pub use systems::INPUT_RETRY_FRAMES;

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::input::systems::read_keyboard;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveInput>()
            .add_systems(Update, read_keyboard.before(GameplaySet::Cooldowns));
    }
}
