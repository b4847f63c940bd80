//! Enemy domain: unit tests for the AI state machine and damage handling.

use bevy::prelude::*;

use super::*;
use crate::combat::{Knockback, PlayerAttack};
use crate::core::{Effect, RecordingSink};
use crate::player::AttackKind;

fn titan_at(x: f32) -> EnemyState {
    EnemyState::new(&EnemyTuning::default(), EnemyFlavor::Titan, x)
}

fn senses(enemy_x: f32, player: Option<Vec2>) -> EnemySenses {
    EnemySenses {
        position: Vec2::new(enemy_x, 0.0),
        player,
        grounded: true,
    }
}

const DT: f32 = 1.0 / 60.0;

#[test]
fn test_detection_and_give_up() {
    let mut enemy = titan_at(250.0);

    enemy.think(DT, &senses(250.0, Some(Vec2::new(100.0, 0.0))));
    assert_eq!(enemy.state, AiState::Chase);

    enemy.think(DT, &senses(250.0, Some(Vec2::new(700.0, 0.0))));
    assert_eq!(enemy.state, AiState::Patrol);
}

#[test]
fn test_chase_keeps_following_inside_give_up_range() {
    let mut enemy = titan_at(250.0);
    enemy.think(DT, &senses(250.0, Some(Vec2::new(100.0, 0.0))));

    // Outside detection but inside 1.5x of it.
    let intent = enemy.think(DT, &senses(250.0, Some(Vec2::new(500.0, 0.0))));
    assert_eq!(enemy.state, AiState::Chase);
    assert_eq!(intent.velocity_x, Some(80.0));
    assert!(enemy.facing_right);
}

#[test]
fn test_patrol_only_leads_to_chase() {
    let mut enemy = titan_at(0.0);
    // Close enough to attack, but patrol must pass through chase first.
    let intent = enemy.think(DT, &senses(0.0, Some(Vec2::new(20.0, 0.0))));
    assert_eq!(enemy.state, AiState::Chase);
    assert!(!intent.strike);
}

#[test]
fn test_attack_strikes_then_returns_to_chase() {
    let mut enemy = titan_at(0.0);
    let close = Some(Vec2::new(20.0, 0.0));

    enemy.think(DT, &senses(0.0, close));
    enemy.think(DT, &senses(0.0, close));
    assert_eq!(enemy.state, AiState::Attack);

    let intent = enemy.think(DT, &senses(0.0, close));
    assert!(intent.strike);
    assert_eq!(intent.velocity_x, Some(0.0));
    assert_eq!(enemy.state, AiState::Chase);
    assert!(enemy.attack_cooldown.is_running());

    // Cooling down: chase continues without a new attack.
    for _ in 0..30 {
        let intent = enemy.think(DT, &senses(0.0, close));
        assert!(!intent.strike);
        assert_eq!(enemy.state, AiState::Chase);
    }
}

#[test]
fn test_stun_returns_to_chase() {
    let mut enemy = titan_at(0.0);
    let mut sink = RecordingSink::default();

    enemy.take_damage(10.0, &mut sink, Vec2::ZERO);
    assert_eq!(enemy.state, AiState::Stunned);

    let intent = enemy.think(0.5, &senses(0.0, Some(Vec2::new(1000.0, 0.0))));
    assert_eq!(intent, EnemyIntent::default());
    assert_eq!(enemy.state, AiState::Stunned);

    enemy.think(0.6, &senses(0.0, Some(Vec2::new(1000.0, 0.0))));
    assert_eq!(enemy.state, AiState::Chase);
}

#[test]
fn test_overkill_is_terminal_with_one_bonus() {
    let mut enemy = titan_at(0.0);
    let mut sink = RecordingSink::default();

    assert_eq!(enemy.take_damage(75.0, &mut sink, Vec2::ZERO), EnemyHit::Killed);
    assert_eq!(enemy.health, 0.0);
    assert!(enemy.is_dead());
    assert_eq!(enemy.take_damage(10.0, &mut sink, Vec2::ZERO), EnemyHit::Ignored);
    assert_eq!(sink.score, vec![100]);
    assert_eq!(sink.count_effects(|e| matches!(e, Effect::EnemyDefeated { .. })), 1);

    let state_before = enemy.state;
    let intent = enemy.think(DT, &senses(0.0, Some(Vec2::new(10.0, 0.0))));
    assert_eq!(intent, EnemyIntent::default());
    assert_eq!(enemy.state, state_before);
}

#[test]
fn test_corpse_lingers_before_removal() {
    let mut enemy = titan_at(0.0);
    let mut sink = RecordingSink::default();
    assert!(!enemy.tick_corpse(1.0));

    enemy.take_damage(100.0, &mut sink, Vec2::ZERO);
    assert!(!enemy.tick_corpse(0.3));
    assert!(enemy.tick_corpse(0.3));
}

#[test]
fn test_patrol_turns_at_bounds() {
    let mut enemy = titan_at(100.0);
    assert_eq!(enemy.patrol_end, 300.0);

    let out = enemy.think(DT, &senses(150.0, None));
    assert_eq!(out.velocity_x, Some(40.0));

    let back = enemy.think(DT, &senses(300.0, None));
    assert_eq!(back.velocity_x, Some(-40.0));

    let again = enemy.think(DT, &senses(100.0, None));
    assert_eq!(again.velocity_x, Some(40.0));
}

#[test]
fn test_chase_jumps_toward_higher_player() {
    let mut enemy = titan_at(0.0);
    enemy.state = AiState::Chase;

    let grounded = enemy.think(DT, &senses(0.0, Some(Vec2::new(120.0, 80.0))));
    assert_eq!(grounded.jump_velocity, Some(300.0));

    let airborne = EnemySenses {
        grounded: false,
        ..senses(0.0, Some(Vec2::new(120.0, 80.0)))
    };
    assert_eq!(enemy.think(DT, &airborne).jump_velocity, None);
}

#[test]
fn test_kick_knocks_back() {
    let mut enemy = titan_at(0.0);
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::new(-40.0, -10.0);
    let kick = PlayerAttack {
        kind: AttackKind::Kick,
        damage: 30.0,
        knockback: Knockback::Horizontal(150.0),
    };

    let hit = enemy.on_player_attack(&kick, &mut velocity, &mut sink, Vec2::ZERO);
    assert_eq!(hit, EnemyHit::Hurt { remaining: 30.0 });
    assert_eq!(velocity, Vec2::new(150.0, -10.0));
}

#[test]
fn test_flavor_multipliers() {
    let tuning = EnemyTuning::default();
    let approx = |a: f32, b: f32| (a - b).abs() < 1e-3;

    let ice = EnemyStats::new(&tuning, EnemyFlavor::Ice);
    assert!(approx(ice.speed, 64.0));
    let fire = EnemyStats::new(&tuning, EnemyFlavor::Fire);
    assert!(approx(fire.damage, 30.0));
    let power = EnemyStats::new(&tuning, EnemyFlavor::Power);
    assert!(approx(power.max_health, 120.0));
    let lightning = EnemyStats::new(&tuning, EnemyFlavor::Lightning);
    assert!(approx(lightning.speed, 100.0));
    assert!(approx(lightning.attack_delay, 1.125));
    let shadow = EnemyStats::new(&tuning, EnemyFlavor::Shadow);
    assert!(approx(shadow.detection_range, 250.0));
    assert!(approx(shadow.damage, 25.0));

    let titan = EnemyStats::new(&tuning, EnemyFlavor::Titan);
    assert_eq!(titan.max_health, 60.0);
}

#[test]
fn test_level_flavors() {
    let flavors: Vec<EnemyFlavor> = (1..=5).map(EnemyFlavor::for_level).collect();
    assert_eq!(
        flavors,
        vec![
            EnemyFlavor::Ice,
            EnemyFlavor::Fire,
            EnemyFlavor::Power,
            EnemyFlavor::Lightning,
            EnemyFlavor::Shadow,
        ]
    );
}
