//! Combat domain: unit tests for the contact resolver, stomp combos and attack reach.

use bevy::prelude::*;

use super::*;
use crate::core::{Effect, RecordingSink};
use crate::enemy::{EnemyFlavor, EnemyHit, EnemyState, EnemyTuning};
use crate::player::{AttackKind, Facing, PlayerDamage, PlayerState, PlayerTuning};

fn titan() -> EnemyState {
    EnemyState::new(&EnemyTuning::default(), EnemyFlavor::Titan, 0.0)
}

/// Run one contact between a player at `player_at` moving at `velocity` and
/// an enemy at `enemy_at`.
fn contact(
    player: &mut PlayerState,
    player_at: Vec2,
    velocity: &mut Vec2,
    enemy: &mut EnemyState,
    enemy_at: Vec2,
    combo: &mut StompCombo,
    sink: &mut RecordingSink,
) -> ContactResolution {
    resolve_contact(
        PlayerContact {
            state: player,
            at: player_at,
            velocity,
        },
        EnemyContact {
            state: enemy,
            at: enemy_at,
        },
        combo,
        &CombatTuning::default(),
        sink,
    )
}

#[test]
fn test_classify_contact_is_pure() {
    let tuning = CombatTuning::default();
    let first = classify_contact(100.0, -100.0, 50.0, 10.0, &tuning);
    let second = classify_contact(100.0, -100.0, 50.0, 10.0, &tuning);
    assert_eq!(first, ContactOutcome::Stomp);
    assert_eq!(first, second);
}

#[test]
fn test_classify_contact_needs_every_condition() {
    let tuning = CombatTuning::default();
    // Falling too slowly.
    assert_eq!(
        classify_contact(100.0, -40.0, 50.0, 0.0, &tuning),
        ContactOutcome::StandardHit
    );
    // Not high enough.
    assert_eq!(
        classify_contact(60.0, -100.0, 50.0, 0.0, &tuning),
        ContactOutcome::StandardHit
    );
    // Too far off centre.
    assert_eq!(
        classify_contact(100.0, -100.0, 50.0, -40.0, &tuning),
        ContactOutcome::StandardHit
    );
    // Rising.
    assert_eq!(
        classify_contact(100.0, 200.0, 50.0, 0.0, &tuning),
        ContactOutcome::StandardHit
    );
}

#[test]
fn test_stomp_bounces_and_damages() {
    let player_tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&player_tuning);
    let mut enemy = titan();
    let mut combo = StompCombo::default();
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::new(30.0, -200.0);

    let resolution = contact(
        &mut player,
        Vec2::new(10.0, 60.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );

    assert_eq!(
        resolution,
        ContactResolution::Stomped {
            points: 100,
            hit: EnemyHit::Killed,
        }
    );
    assert_eq!(velocity.y, 350.0);
    assert_eq!(velocity.x, 30.0);
    assert!(enemy.is_dead());
    // Kill bonus plus stomp points.
    assert_eq!(sink.total_score(), 200);
    assert_eq!(player.health, player.max_health);
    assert_eq!(sink.count_effects(|e| matches!(e, Effect::Stomp { .. })), 1);
}

#[test]
fn test_stomp_combo_multiplier_caps() {
    let tuning = CombatTuning::default();
    let mut combo = StompCombo::default();
    let points: Vec<u32> = (0..6).map(|_| combo.register(&tuning)).collect();
    assert_eq!(points, vec![100, 200, 300, 400, 500, 500]);
}

#[test]
fn test_stomp_combo_resets_after_window() {
    let tuning = CombatTuning::default();
    let mut combo = StompCombo::default();
    combo.register(&tuning);
    combo.register(&tuning);

    combo.tick(1.5);
    assert_eq!(combo.count, 2);
    assert_eq!(combo.register(&tuning), 300);

    combo.tick(2.1);
    assert_eq!(combo.count, 0);
    assert_eq!(combo.register(&tuning), 100);
}

#[test]
fn test_standard_hit_respects_enemy_cooldown() {
    let player_tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&player_tuning);
    let mut enemy = titan();
    let mut combo = StompCombo::default();
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    let first = contact(
        &mut player,
        Vec2::new(-20.0, 0.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );
    assert_eq!(
        first,
        ContactResolution::Struck(PlayerDamage::Hurt { remaining: 80.0 })
    );
    assert_eq!(velocity.x, -200.0);
    assert_eq!(sink.damage, vec![20.0]);

    let second = contact(
        &mut player,
        Vec2::new(-20.0, 0.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );
    assert_eq!(second, ContactResolution::OnCooldown);
    assert_eq!(player.health, 80.0);
}

#[test]
fn test_contact_outside_attack_range_misses() {
    let player_tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&player_tuning);
    let mut enemy = titan();
    let mut combo = StompCombo::default();
    let mut sink = RecordingSink::default();
    // Rising off the enemy's head: boxes overlap but centres are 51 apart.
    let mut velocity = Vec2::new(0.0, 100.0);

    let resolution = contact(
        &mut player,
        Vec2::new(0.0, 51.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );
    assert_eq!(resolution, ContactResolution::Missed);
    assert_eq!(player.health, 100.0);
    assert!(sink.damage.is_empty());
    assert_eq!(velocity, Vec2::new(0.0, 100.0));

    // The swing still used up the enemy's attack.
    let again = contact(
        &mut player,
        Vec2::new(-20.0, 0.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );
    assert_eq!(again, ContactResolution::OnCooldown);
}

#[test]
fn test_dead_enemy_is_ignored() {
    let player_tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&player_tuning);
    let mut enemy = titan();
    let mut combo = StompCombo::default();
    let mut sink = RecordingSink::default();
    enemy.take_damage(500.0, &mut sink, Vec2::ZERO);
    let score_before = sink.total_score();

    let mut velocity = Vec2::new(0.0, -200.0);
    let resolution = contact(
        &mut player,
        Vec2::new(0.0, 60.0),
        &mut velocity,
        &mut enemy,
        Vec2::ZERO,
        &mut combo,
        &mut sink,
    );
    assert_eq!(resolution, ContactResolution::Ignored);
    assert_eq!(velocity.y, -200.0);
    assert_eq!(sink.total_score(), score_before);
    assert_eq!(combo.count, 0);
}

#[test]
fn test_ai_strike_rechecks_range() {
    let player_tuning = PlayerTuning::default();
    let mut player = PlayerState::new(&player_tuning);
    let enemy = titan();
    let mut sink = RecordingSink::default();
    let mut velocity = Vec2::ZERO;

    let missed = resolve_ai_strike(
        &enemy,
        Vec2::ZERO,
        PlayerContact {
            state: &mut player,
            at: Vec2::new(120.0, 0.0),
            velocity: &mut velocity,
        },
        &mut sink,
    );
    assert_eq!(missed, None);
    assert!(sink.damage.is_empty());

    let landed = resolve_ai_strike(
        &enemy,
        Vec2::ZERO,
        PlayerContact {
            state: &mut player,
            at: Vec2::new(30.0, 0.0),
            velocity: &mut velocity,
        },
        &mut sink,
    );
    assert_eq!(landed, Some(PlayerDamage::Hurt { remaining: 80.0 }));
    assert_eq!(velocity.x, 200.0);
}

#[test]
fn test_kick_reaches_forward_only() {
    let tuning = PlayerTuning::default();
    let target = Vec2::new(45.0, 0.0);

    let kick = attack_on(AttackKind::Kick, &tuning, Vec2::ZERO, Facing::Right, target);
    assert_eq!(
        kick,
        Some(PlayerAttack {
            kind: AttackKind::Kick,
            damage: 30.0,
            knockback: Knockback::Horizontal(150.0),
        })
    );
    assert!(!reaches(AttackKind::Kick, &tuning, Vec2::ZERO, Facing::Left, target));
}

#[test]
fn test_punch_range() {
    let tuning = PlayerTuning::default();
    assert!(reaches(
        AttackKind::Punch,
        &tuning,
        Vec2::ZERO,
        Facing::Right,
        Vec2::new(30.0, 0.0)
    ));
    assert!(!reaches(
        AttackKind::Punch,
        &tuning,
        Vec2::ZERO,
        Facing::Right,
        Vec2::new(65.0, 0.0)
    ));
}

#[test]
fn test_fire_breath_hits_in_front_only() {
    let tuning = PlayerTuning::default();
    let ahead = Vec2::new(70.0, 0.0);
    let behind = Vec2::new(-20.0, 0.0);

    assert!(reaches(AttackKind::FireBreath, &tuning, Vec2::ZERO, Facing::Right, ahead));
    assert!(!reaches(AttackKind::FireBreath, &tuning, Vec2::ZERO, Facing::Right, behind));
    assert!(reaches(AttackKind::FireBreath, &tuning, Vec2::ZERO, Facing::Left, behind));
}

#[test]
fn test_ultra_blast_pushes_outward() {
    let tuning = PlayerTuning::default();
    let above = attack_on(
        AttackKind::UltraBlast,
        &tuning,
        Vec2::ZERO,
        Facing::Left,
        Vec2::new(0.0, 90.0),
    );
    let Some(PlayerAttack {
        damage,
        knockback: Knockback::Full(push),
        ..
    }) = above
    else {
        panic!("expected a blast hit, got {:?}", above);
    };
    assert_eq!(damage, 50.0);
    assert!(push.x.abs() < 1e-3);
    assert!((push.y - 200.0).abs() < 1e-3);

    assert!(
        attack_on(
            AttackKind::UltraBlast,
            &tuning,
            Vec2::ZERO,
            Facing::Left,
            Vec2::new(0.0, 110.0),
        )
        .is_none()
    );
}

#[test]
fn test_knockback_apply() {
    let mut velocity = Vec2::new(10.0, 20.0);
    Knockback::None.apply(&mut velocity);
    assert_eq!(velocity, Vec2::new(10.0, 20.0));
    Knockback::Horizontal(-150.0).apply(&mut velocity);
    assert_eq!(velocity, Vec2::new(-150.0, 20.0));
    Knockback::Full(Vec2::new(1.0, 2.0)).apply(&mut velocity);
    assert_eq!(velocity, Vec2::new(1.0, 2.0));
}
