//! Player domain: unit tests for movement, combat, power-ups and damage.

use bevy::prelude::*;

use super::*;
use crate::core::{DEATH_PENALTY, Effect, RecordingSink};
use crate::input::InputSnapshot;

fn grounded_player(tuning: &PlayerTuning) -> PlayerState {
    let mut player = PlayerState::new(tuning);
    player.set_grounded(true, 0.0, tuning);
    player
}

fn buttons(jump: bool, kick: bool, punch: bool) -> InputSnapshot {
    InputSnapshot {
        jump,
        kick,
        punch,
        ..default()
    }
}

/// Observe `input` and run one frame of movement.
fn step(
    player: &mut PlayerState,
    input: InputSnapshot,
    velocity: &mut Vec2,
    tuning: &PlayerTuning,
    sink: &mut RecordingSink,
) -> f32 {
    player.observe_input(&input);
    player.apply_movement(&input, velocity, tuning, sink, Vec2::ZERO)
}

fn is_jump(effect: &Effect) -> bool {
    matches!(effect, Effect::Jump { .. } | Effect::DoubleJump { .. })
}

#[test]
fn test_health_stays_in_bounds() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    let mut sink = RecordingSink::default();

    for amount in [10.0, -5.0, 35.0, 250.0, 10.0] {
        player.take_damage(amount, &mut sink);
        assert!(player.health >= 0.0);
        assert!(player.health <= player.max_health);
    }
    assert_eq!(player.health, 0.0);
}

#[test]
fn test_damage_reports_to_progress() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    let mut sink = RecordingSink::default();

    let outcome = player.take_damage(30.0, &mut sink);
    assert_eq!(outcome, PlayerDamage::Hurt { remaining: 70.0 });
    assert_eq!(sink.damage, vec![30.0]);
    assert_eq!(sink.count_effects(|e| matches!(e, Effect::PlayerHurt { .. })), 1);
}

#[test]
fn test_heal_clamps_to_max() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    let mut sink = RecordingSink::default();

    player.take_damage(30.0, &mut sink);
    assert_eq!(player.heal(50.0), 30.0);
    assert_eq!(player.health, 100.0);
}

#[test]
fn test_invincibility_blocks_all_damage() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    let mut sink = RecordingSink::default();
    player.activate_power_up(PowerUpKind::Invincibility, 10.0, &mut sink);

    for _ in 0..5 {
        assert_eq!(player.take_damage(80.0, &mut sink), PlayerDamage::Blocked);
    }
    assert_eq!(player.health, 100.0);
    assert!(sink.damage.is_empty());
    assert_eq!(sink.count_effects(|e| *e == Effect::DamageBlocked), 5);
}

#[test]
fn test_exactly_two_jumps_between_landings() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    for _ in 0..4 {
        step(&mut player, buttons(true, false, false), &mut velocity, &tuning, &mut sink);
        player.tick(0.2, &mut sink);
        step(&mut player, buttons(false, false, false), &mut velocity, &tuning, &mut sink);
    }
    assert_eq!(sink.count_effects(is_jump), 2);
    assert!(player.has_double_jumped);
    assert_eq!(velocity.y, tuning.double_jump_velocity);

    assert_eq!(player.set_grounded(true, 0.0, &tuning), GroundChange::Landed);
    assert!(!player.has_double_jumped);
    step(&mut player, buttons(true, false, false), &mut velocity, &tuning, &mut sink);
    assert_eq!(sink.count_effects(is_jump), 3);
}

#[test]
fn test_jump_outcomes_in_order() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    let first = player.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO);
    assert_eq!(first, JumpOutcome::Ground);
    assert_eq!(velocity.y, tuning.jump_velocity);

    // Still on the jump cooldown.
    let early = player.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO);
    assert_eq!(early, JumpOutcome::Refused);

    player.tick(0.11, &mut sink);
    let second = player.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO);
    assert_eq!(second, JumpOutcome::Double);

    player.tick(0.11, &mut sink);
    let third = player.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO);
    assert_eq!(third, JumpOutcome::Refused);
}

#[test]
fn test_coyote_time_allows_ground_jump() {
    let tuning = PlayerTuning::default();
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    let mut player = grounded_player(&tuning);
    assert_eq!(player.set_grounded(false, 0.0, &tuning), GroundChange::LeftGround);
    player.tick(0.1, &mut sink);
    assert!(player.can_ground_jump());
    assert_eq!(
        player.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO),
        JumpOutcome::Ground
    );

    let mut late = grounded_player(&tuning);
    late.set_grounded(false, 0.0, &tuning);
    late.tick(0.2, &mut sink);
    assert!(!late.can_ground_jump());
    assert_eq!(
        late.try_jump(&mut velocity, &tuning, &mut sink, Vec2::ZERO),
        JumpOutcome::Double
    );
}

#[test]
fn test_rising_body_is_not_a_landing() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    assert_eq!(
        player.set_grounded(true, tuning.jump_velocity, &tuning),
        GroundChange::Unchanged
    );
    assert!(!player.grounded);
}

#[test]
fn test_movement_sets_velocity_and_facing() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    let left = InputSnapshot {
        horizontal: -1.0,
        ..default()
    };
    step(&mut player, left, &mut velocity, &tuning, &mut sink);
    assert_eq!(velocity.x, -200.0);
    assert_eq!(player.facing, Facing::Left);

    step(&mut player, InputSnapshot::default(), &mut velocity, &tuning, &mut sink);
    assert!((velocity.x + 160.0).abs() < 1e-3);
    assert_eq!(player.facing, Facing::Left);
}

#[test]
fn test_power_up_refresh_restarts_window() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();

    assert_eq!(
        player.activate_power_up(PowerUpKind::SpeedBoost, 10.0, &mut sink),
        PowerUpActivation::Started
    );
    player.tick(6.0, &mut sink);
    assert_eq!(
        player.activate_power_up(PowerUpKind::SpeedBoost, 10.0, &mut sink),
        PowerUpActivation::Refreshed
    );
    player.tick(6.0, &mut sink);
    assert!(player.has_power_up(PowerUpKind::SpeedBoost));

    player.tick(4.5, &mut sink);
    assert!(!player.has_power_up(PowerUpKind::SpeedBoost));
    let expired = sink.count_effects(|e| {
        *e == Effect::PowerUpExpired {
            kind: PowerUpKind::SpeedBoost,
        }
    });
    assert_eq!(expired, 1);
}

#[test]
fn test_speed_boost_applies_once() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;
    let right = InputSnapshot {
        horizontal: 1.0,
        ..default()
    };

    player.activate_power_up(PowerUpKind::SpeedBoost, 10.0, &mut sink);
    player.activate_power_up(PowerUpKind::SpeedBoost, 10.0, &mut sink);
    for _ in 0..3 {
        step(&mut player, right, &mut velocity, &tuning, &mut sink);
    }
    assert_eq!(velocity.x, 300.0);
}

#[test]
fn test_fly_mode_controls_vertical_velocity() {
    let tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;
    player.activate_power_up(PowerUpKind::FlyMode, 10.0, &mut sink);

    let up = InputSnapshot {
        vertical: 1.0,
        jump: true,
        ..default()
    };
    let scale = step(&mut player, up, &mut velocity, &tuning, &mut sink);
    assert_eq!(scale, tuning.fly_gravity_scale);
    assert!((velocity.y - 160.0).abs() < 1e-3);
    assert_eq!(sink.count_effects(is_jump), 0);

    step(&mut player, InputSnapshot::default(), &mut velocity, &tuning, &mut sink);
    assert!((velocity.y - 144.0).abs() < 1e-3);
}

#[test]
fn test_three_punches_build_a_combo() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();

    for _ in 0..3 {
        player.observe_input(&buttons(false, false, false));
        player.observe_input(&buttons(false, false, true));
        assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::Punch]);
        player.tick(0.35, &mut sink);
    }
    assert_eq!(player.combo_count, 3);

    player.tick(1.1, &mut sink);
    assert_eq!(player.combo_count, 0);

    player.observe_input(&buttons(false, false, false));
    player.observe_input(&buttons(false, false, true));
    player.resolve_combat(&tuning);
    assert_eq!(player.combo_count, 1);
}

#[test]
fn test_kick_wins_same_frame_press() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);

    player.observe_input(&buttons(false, true, true));
    assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::Kick]);
    assert_eq!(player.attack_cooldown.remaining(), tuning.kick_cooldown);
}

#[test]
fn test_no_attack_while_on_cooldown() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);

    player.observe_input(&buttons(false, true, false));
    assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::Kick]);

    player.observe_input(&buttons(false, false, false));
    player.observe_input(&buttons(false, false, true));
    assert!(player.resolve_combat(&tuning).is_empty());
    assert_eq!(player.combo_count, 1);
}

#[test]
fn test_fire_breath_needs_power_up_and_both_buttons() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();

    player.observe_input(&buttons(false, true, true));
    assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::Kick]);
    player.tick(0.5, &mut sink);

    player.activate_power_up(PowerUpKind::FireBreath, 10.0, &mut sink);
    player.observe_input(&buttons(false, true, true));
    assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::FireBreath]);

    player.tick(0.5, &mut sink);
    player.observe_input(&buttons(false, true, true));
    assert!(player.resolve_combat(&tuning).is_empty());

    player.tick(3.0, &mut sink);
    player.observe_input(&buttons(false, true, true));
    assert_eq!(player.resolve_combat(&tuning), vec![AttackKind::FireBreath]);
}

#[test]
fn test_ultra_blast_needs_combo() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    player.activate_power_up(PowerUpKind::UltraBlast, 10.0, &mut sink);

    let punch = |player: &mut PlayerState, sink: &mut RecordingSink| {
        player.observe_input(&buttons(false, false, false));
        player.observe_input(&buttons(false, false, true));
        let attacks = player.resolve_combat(&tuning);
        player.tick(0.35, sink);
        attacks
    };

    assert_eq!(punch(&mut player, &mut sink), vec![AttackKind::Punch]);
    assert_eq!(
        punch(&mut player, &mut sink),
        vec![AttackKind::Punch, AttackKind::UltraBlast]
    );
    assert_eq!(punch(&mut player, &mut sink), vec![AttackKind::Punch]);
}

#[test]
fn test_death_and_in_place_respawn() {
    let tuning = PlayerTuning::default();
    let mut player = grounded_player(&tuning);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::new(120.0, -300.0);
    player.activate_power_up(PowerUpKind::FlyMode, 10.0, &mut sink);
    player.combo_count = 2;

    assert_eq!(player.take_damage(100.0, &mut sink), PlayerDamage::Died);
    assert!(player.is_down());
    assert_eq!(player.take_damage(10.0, &mut sink), PlayerDamage::AlreadyDown);

    player.respawn(&mut velocity, &mut sink, Vec2::new(100.0, 150.0));
    assert!(!player.is_down());
    assert_eq!(player.health, tuning.max_health);
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(player.combo_count, 0);
    assert!(player.has_power_up(PowerUpKind::FlyMode));
    assert_eq!(sink.damage, vec![100.0, DEATH_PENALTY]);
    assert_eq!(player.deaths, 1);
}

#[test]
fn test_costume_unlock_rules() {
    assert!(CostumeId::Default.unlocked_by(1, 0, false));
    assert!(!CostumeId::Fire.unlocked_by(1, 0, false));
    assert!(CostumeId::Fire.unlocked_by(2, 0, false));
    assert!(CostumeId::Ice.unlocked_by(1, 5, false));
    assert!(!CostumeId::Ice.unlocked_by(1, 4, false));
    assert!(CostumeId::Lightning.unlocked_by(3, 0, false));
    assert!(CostumeId::Shadow.unlocked_by(4, 0, false));
    assert!(!CostumeId::Legendary.unlocked_by(5, 20, false));
    assert!(CostumeId::Legendary.unlocked_by(1, 5, true));
}

#[test]
fn test_only_legendary_changes_size() {
    for costume in CostumeId::ALL {
        let variant = costume.variant();
        if costume == CostumeId::Legendary {
            assert_eq!(variant.size_scale, 2.5);
        } else {
            assert_eq!(variant.size_scale, 1.0);
        }
        assert_eq!(variant.has_wings(), costume != CostumeId::Default);
    }
}
