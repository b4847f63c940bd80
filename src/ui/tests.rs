//! UI domain: unit tests for HUD formatting.

use bevy::prelude::*;

use crate::player::{PowerUpKind, PowerUps};
use crate::ui::hud_enemy::fill_layout;
use crate::ui::hud_player::health_bar_color;
use crate::ui::hud_score::power_up_summary;

#[test]
fn test_health_bar_thresholds() {
    let green = Color::srgb_u8(0x00, 0xff, 0x00);
    let yellow = Color::srgb_u8(0xff, 0xff, 0x00);
    let red = Color::srgb_u8(0xff, 0x00, 0x00);

    assert_eq!(health_bar_color(1.0), green);
    assert_eq!(health_bar_color(0.61), green);
    assert_eq!(health_bar_color(0.6), yellow);
    assert_eq!(health_bar_color(0.31), yellow);
    assert_eq!(health_bar_color(0.3), red);
    assert_eq!(health_bar_color(0.0), red);
}

#[test]
fn test_power_up_summary() {
    let mut power_ups = PowerUps::default();
    assert_eq!(power_up_summary(&power_ups), "");

    power_ups.activate(PowerUpKind::FlyMode, 10.0);
    power_ups.activate(PowerUpKind::FireBreath, 10.0);
    power_ups.tick(2.5);
    assert_eq!(power_up_summary(&power_ups), "Fire Breath 8s, Fly 8s");
}

#[test]
fn test_enemy_bar_fill_stays_left_aligned() {
    assert_eq!(fill_layout(1.0), (40.0, 0.0));
    assert_eq!(fill_layout(0.5), (20.0, -10.0));
    assert_eq!(fill_layout(-0.2), (0.0, -20.0));
}
