//! Combat domain: which enemies a player attack reaches and how it pushes them.

use bevy::prelude::*;

use crate::player::{AttackKind, Facing, PlayerTuning};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Knockback {
    None,
    /// Overrides horizontal velocity only.
    Horizontal(f32),
    /// Overrides both axes.
    Full(Vec2),
}

impl Knockback {
    pub fn apply(&self, velocity: &mut Vec2) {
        match *self {
            Knockback::None => {}
            Knockback::Horizontal(x) => velocity.x = x,
            Knockback::Full(v) => *velocity = v,
        }
    }
}

/// A player attack as it arrives at one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerAttack {
    pub kind: AttackKind,
    pub damage: f32,
    pub knockback: Knockback,
}

/// Where an attack is centred, for hit checks and effects.
pub fn strike_point(kind: AttackKind, tuning: &PlayerTuning, origin: Vec2, facing: Facing) -> Vec2 {
    match kind {
        AttackKind::Kick => origin + Vec2::new(facing.sign() * tuning.kick_range, 0.0),
        AttackKind::Punch => origin + Vec2::new(facing.sign() * tuning.punch_range, 0.0),
        AttackKind::FireBreath => {
            origin + Vec2::new(facing.sign() * tuning.fire_breath_range * 0.5, 0.0)
        }
        AttackKind::UltraBlast => origin,
    }
}

pub fn reaches(
    kind: AttackKind,
    tuning: &PlayerTuning,
    origin: Vec2,
    facing: Facing,
    target: Vec2,
) -> bool {
    match kind {
        AttackKind::Kick => {
            strike_point(kind, tuning, origin, facing).distance(target) < tuning.kick_range
        }
        AttackKind::Punch => {
            strike_point(kind, tuning, origin, facing).distance(target) < tuning.punch_range
        }
        AttackKind::FireBreath => {
            let in_front = facing.toward(target.x - origin.x) == facing;
            in_front && origin.distance(target) < tuning.fire_breath_range
        }
        AttackKind::UltraBlast => origin.distance(target) < tuning.ultra_blast_radius,
    }
}

/// The attack `target` receives, or `None` when out of reach.
pub fn attack_on(
    kind: AttackKind,
    tuning: &PlayerTuning,
    origin: Vec2,
    facing: Facing,
    target: Vec2,
) -> Option<PlayerAttack> {
    if !reaches(kind, tuning, origin, facing, target) {
        return None;
    }
    let away = target - origin;
    let (damage, knockback) = match kind {
        AttackKind::Kick => {
            let side = facing.toward(away.x).sign();
            (tuning.kick_damage, Knockback::Horizontal(side * tuning.kick_knockback))
        }
        AttackKind::Punch => (tuning.punch_damage, Knockback::None),
        AttackKind::FireBreath => (tuning.fire_breath_damage, Knockback::None),
        AttackKind::UltraBlast => {
            let angle = away.y.atan2(away.x);
            let push = Vec2::new(
                angle.cos() * tuning.ultra_blast_knockback_x,
                angle.sin() * tuning.ultra_blast_knockback_y,
            );
            (tuning.ultra_blast_damage, Knockback::Full(push))
        }
    };
    Some(PlayerAttack {
        kind,
        damage,
        knockback,
    })
}
