//! Input domain: unit tests for edge tracking and the keyboard mapping.

use bevy::prelude::*;

use super::systems::snapshot_from_keys;
use super::*;

fn snapshot(jump: bool, kick: bool, punch: bool) -> InputSnapshot {
    InputSnapshot {
        jump,
        kick,
        punch,
        ..default()
    }
}

#[test]
fn test_held_button_rises_only_once() {
    let mut edges = InputEdgeTracker::default();

    edges.observe(&snapshot(true, false, false));
    assert!(edges.rising(Action::Jump));

    edges.observe(&snapshot(true, false, false));
    assert!(!edges.rising(Action::Jump));
    assert!(edges.held(Action::Jump));

    edges.observe(&snapshot(false, false, false));
    edges.observe(&snapshot(true, false, false));
    assert!(edges.rising(Action::Jump));
}

#[test]
fn test_actions_are_tracked_independently() {
    let mut edges = InputEdgeTracker::default();
    edges.observe(&snapshot(false, true, false));
    edges.observe(&snapshot(false, true, true));

    assert!(!edges.rising(Action::Kick));
    assert!(edges.rising(Action::Punch));
    assert!(!edges.rising(Action::Jump));
}

#[test]
fn test_reset_forgets_held_buttons() {
    let mut edges = InputEdgeTracker::default();
    edges.observe(&snapshot(false, true, false));
    edges.reset();
    assert!(!edges.held(Action::Kick));

    edges.observe(&snapshot(false, true, false));
    assert!(edges.rising(Action::Kick));
}

#[test]
fn test_snapshot_axes_are_clamped() {
    let input = InputSnapshot {
        horizontal: 3.0,
        vertical: -2.0,
        ..default()
    };
    assert_eq!(input.horizontal(), 1.0);
    assert_eq!(input.vertical(), -1.0);
}

#[test]
fn test_keyboard_mapping() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::ArrowLeft);
    keys.press(KeyCode::Space);
    keys.press(KeyCode::KeyZ);

    let input = snapshot_from_keys(&keys);
    assert_eq!(input.horizontal, -1.0);
    assert_eq!(input.vertical, 1.0);
    assert!(input.jump);
    assert!(input.punch);
    assert!(!input.kick);
}

#[test]
fn test_opposing_keys_cancel() {
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyA);
    keys.press(KeyCode::KeyD);
    keys.press(KeyCode::KeyS);
    keys.press(KeyCode::KeyX);

    let input = snapshot_from_keys(&keys);
    assert_eq!(input.horizontal, 0.0);
    assert_eq!(input.vertical, -1.0);
    assert!(input.kick);
}
