//! Input domain: keyboard sampling.

use bevy::prelude::*;

use crate::input::{ActiveInput, InputSnapshot};

/// Frames to wait for a keyboard before warning about it.
pub const INPUT_RETRY_FRAMES: u32 = 60;

pub(crate) fn read_keyboard(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<ActiveInput>,
) {
    let Some(keyboard) = keyboard else {
        input.snapshot = None;
        input.missing_frames = input.missing_frames.saturating_add(1);
        if input.missing_frames == INPUT_RETRY_FRAMES {
            warn!(
                "No keyboard input after {} frames; player controls are disabled",
                INPUT_RETRY_FRAMES
            );
        }
        return;
    };

    if input.missing_frames >= INPUT_RETRY_FRAMES {
        info!("Keyboard input available again");
    }
    input.missing_frames = 0;
    input.snapshot = Some(snapshot_from_keys(&keyboard));
}

pub(crate) fn snapshot_from_keys(keyboard: &ButtonInput<KeyCode>) -> InputSnapshot {
    let mut x = 0.0;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        y -= 1.0;
    }
    let jump = keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp, KeyCode::Space]);
    if jump {
        y += 1.0;
    }

    InputSnapshot {
        horizontal: x,
        vertical: y,
        jump,
        kick: keyboard.pressed(KeyCode::KeyX),
        punch: keyboard.pressed(KeyCode::KeyZ),
    }
}
