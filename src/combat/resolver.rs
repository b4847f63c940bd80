//! Combat domain: player-versus-enemy contact rules.

use bevy::prelude::*;

use crate::combat::resources::{CombatTuning, StompCombo};
use crate::core::{Effect, EffectSink, ProgressSink};
use crate::enemy::{EnemyHit, EnemyState};
use crate::player::{PlayerDamage, PlayerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Stomp,
    StandardHit,
}

/// Stomp when the player is above the enemy, falling, and roughly centred.
/// `dx` is player x minus enemy x.
pub fn classify_contact(
    player_y: f32,
    player_vy: f32,
    enemy_y: f32,
    dx: f32,
    tuning: &CombatTuning,
) -> ContactOutcome {
    let above = player_y > enemy_y + tuning.stomp_height;
    let falling = player_vy < -tuning.stomp_fall_speed;
    let centred = dx.abs() < tuning.stomp_width;
    if above && falling && centred {
        ContactOutcome::Stomp
    } else {
        ContactOutcome::StandardHit
    }
}

/// The player's side of a contact.
pub struct PlayerContact<'a> {
    pub state: &'a mut PlayerState,
    pub at: Vec2,
    pub velocity: &'a mut Vec2,
}

/// The enemy's side of a contact.
pub struct EnemyContact<'a> {
    pub state: &'a mut EnemyState,
    pub at: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactResolution {
    /// Dead enemies do not interact.
    Ignored,
    Stomped { points: u32, hit: EnemyHit },
    Struck(PlayerDamage),
    /// Standard hit while the enemy's attack was cooling down.
    OnCooldown,
    /// The enemy swung but the player was out of attack range.
    Missed,
}

pub fn resolve_contact<S>(
    player: PlayerContact<'_>,
    enemy: EnemyContact<'_>,
    combo: &mut StompCombo,
    tuning: &CombatTuning,
    sink: &mut S,
) -> ContactResolution
where
    S: ProgressSink + EffectSink,
{
    if enemy.state.is_dead() {
        return ContactResolution::Ignored;
    }

    let outcome = classify_contact(
        player.at.y,
        player.velocity.y,
        enemy.at.y,
        player.at.x - enemy.at.x,
        tuning,
    );
    match outcome {
        ContactOutcome::Stomp => {
            player.velocity.y = tuning.stomp_bounce;
            let hit = enemy.state.take_damage(tuning.stomp_damage, sink, enemy.at);
            let points = combo.register(tuning);
            sink.add_score(points);
            sink.play(Effect::Stomp {
                at: enemy.at,
                points,
                combo: combo.count,
            });
            info!("Stomp! +{} points ({}x combo)", points, combo.count);
            ContactResolution::Stomped { points, hit }
        }
        ContactOutcome::StandardHit => {
            if !enemy.state.try_begin_strike() {
                return ContactResolution::OnCooldown;
            }
            match resolve_ai_strike(enemy.state, enemy.at, player, sink) {
                Some(damage) => ContactResolution::Struck(damage),
                None => ContactResolution::Missed,
            }
        }
    }
}

/// An enemy strike landing: damage plus a horizontal shove away from the enemy.
pub fn strike_player<S>(
    enemy: &EnemyState,
    enemy_at: Vec2,
    player: PlayerContact<'_>,
    sink: &mut S,
) -> PlayerDamage
where
    S: ProgressSink + EffectSink,
{
    sink.play(Effect::EnemyStrike { at: enemy_at });
    let damage = player.state.take_damage(enemy.stats.damage, sink);
    if damage != PlayerDamage::AlreadyDown {
        let side = if player.at.x < enemy_at.x { -1.0 } else { 1.0 };
        player.velocity.x = side * enemy.stats.strike_knockback;
    }
    damage
}

/// An enemy strike that only lands inside the attack range. Used by the AI
/// attack state and by contact hits, since boxes can touch out of range.
pub fn resolve_ai_strike<S>(
    enemy: &EnemyState,
    enemy_at: Vec2,
    player: PlayerContact<'_>,
    sink: &mut S,
) -> Option<PlayerDamage>
where
    S: ProgressSink + EffectSink,
{
    if enemy_at.distance(player.at) >= enemy.stats.attack_range {
        sink.play(Effect::EnemyStrike { at: enemy_at });
        return None;
    }
    Some(strike_player(enemy, enemy_at, player, sink))
}
