//! Combat domain: systems that land player attacks and dispatch overlaps.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collectible::Collectible;
use crate::combat::melee::{attack_on, strike_point};
use crate::combat::resolver::{ContactResolution, EnemyContact, PlayerContact, resolve_contact};
use crate::combat::resources::{CombatTuning, StompCombo};
use crate::core::{Effect, EffectSink, Extent, Feedback, GameRng, Progress};
use crate::enemy::{Enemy, EnemyHit, EnemyState};
use crate::player::{Player, PlayerState, PlayerTuning};

pub(crate) fn tick_stomp_combo(time: Res<Time>, mut combo: ResMut<StompCombo>) {
    combo.tick(time.delta_secs());
}

/// Start this frame's player attacks and apply them to every live enemy in
/// reach.
pub(crate) fn land_player_attacks(
    tuning: Res<PlayerTuning>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut player_query: Query<(&Transform, &mut PlayerState), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (&Transform, &mut EnemyState, &mut LinearVelocity),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok((player_transform, mut player)) = player_query.single_mut() else {
        return;
    };
    if player.is_down() {
        return;
    }
    let origin = player_transform.translation.truncate();
    let facing = player.facing;
    let mut feedback = Feedback::new(&mut *progress, &mut effects);

    for kind in player.resolve_combat(&tuning) {
        let mut hit_any = false;
        for (enemy_transform, mut enemy, mut velocity) in &mut enemy_query {
            if enemy.is_dead() {
                continue;
            }
            let target = enemy_transform.translation.truncate();
            let Some(attack) = attack_on(kind, &tuning, origin, facing, target) else {
                continue;
            };
            let hit = enemy.on_player_attack(&attack, &mut velocity.0, &mut feedback, target);
            hit_any |= hit != EnemyHit::Ignored;
        }
        let at = strike_point(kind, &tuning, origin, facing);
        feedback.play(Effect::Attack {
            kind,
            at,
            hit: hit_any,
        });
    }
}

/// Player-versus-enemy overlaps: stomps and contact strikes.
pub(crate) fn resolve_enemy_contacts(
    tuning: Res<CombatTuning>,
    mut combo: ResMut<StompCombo>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut player_query: Query<
        (&Transform, &Extent, &mut PlayerState, &mut LinearVelocity),
        (With<Player>, Without<Enemy>),
    >,
    mut enemy_query: Query<(&Transform, &Extent, &mut EnemyState), (With<Enemy>, Without<Player>)>,
) {
    let Ok((player_transform, player_extent, mut player, mut player_velocity)) =
        player_query.single_mut()
    else {
        return;
    };
    let player_at = player_transform.translation.truncate();
    let mut feedback = Feedback::new(&mut *progress, &mut effects);

    for (enemy_transform, enemy_extent, mut enemy) in &mut enemy_query {
        if player.is_down() {
            break;
        }
        let enemy_at = enemy_transform.translation.truncate();
        if !player_extent.overlaps(player_at, enemy_extent, enemy_at) {
            continue;
        }
        let resolution = resolve_contact(
            PlayerContact {
                state: &mut *player,
                at: player_at,
                velocity: &mut player_velocity.0,
            },
            EnemyContact {
                state: &mut *enemy,
                at: enemy_at,
            },
            &mut combo,
            &tuning,
            &mut feedback,
        );
        if resolution != ContactResolution::Ignored {
            debug!("Enemy contact: {:?}", resolution);
        }
    }
}

/// Player-versus-collectible overlaps.
pub(crate) fn collect_pickups(
    tuning: Res<PlayerTuning>,
    mut rng: ResMut<GameRng>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut player_query: Query<(&Transform, &Extent, &mut PlayerState), With<Player>>,
    mut pickup_query: Query<(&Transform, &Extent, &mut Collectible), Without<Player>>,
) {
    let Ok((player_transform, player_extent, mut player)) = player_query.single_mut() else {
        return;
    };
    if player.is_down() {
        return;
    }
    let player_at = player_transform.translation.truncate();
    let mut feedback = Feedback::new(&mut *progress, &mut effects);

    for (transform, extent, mut collectible) in &mut pickup_query {
        if collectible.is_collected() {
            continue;
        }
        let at = transform.translation.truncate();
        if !player_extent.overlaps(player_at, extent, at) {
            continue;
        }
        collectible.collect(
            &mut player,
            &mut feedback,
            &mut rng.rng,
            tuning.power_up_duration,
            at,
        );
    }
}
