//! Enemy domain: spawning and per-frame drivers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{PlayerContact, resolve_ai_strike};
use crate::core::{Effect, Extent, Feedback, GameLayer, Progress};
use crate::enemy::resources::{EnemyFlavor, EnemyTuning};
use crate::enemy::state::{AiState, Enemy, EnemySenses, EnemyState};
use crate::player::{Player, PlayerState};

const GROUND_PROBE: f32 = 4.0;
/// How long the hurt flash shows after a hit.
const HURT_FLASH: f32 = 0.2;

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub state: EnemyState,
    pub extent: Extent,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
    pub friction: Friction,
}

impl EnemyBundle {
    pub fn new(position: Vec2, tuning: &EnemyTuning, flavor: EnemyFlavor) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        Self {
            enemy: Enemy,
            state: EnemyState::new(tuning, flavor, position.x),
            extent: Extent::from_size(size),
            sprite: Sprite {
                color: flavor.variant().color,
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.8),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_layers: CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(1.0),
            friction: Friction::new(0.0),
        }
    }
}

pub(crate) fn detect_enemy_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Extent, &LinearVelocity, &mut EnemyState), With<Enemy>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    for (transform, extent, velocity, mut state) in &mut query {
        let feet = transform.translation.truncate() - Vec2::new(0.0, extent.half.y);
        let hit = spatial_query.cast_ray(feet, Dir2::NEG_Y, GROUND_PROBE, true, &ground_filter);
        state.grounded = hit.is_some() && velocity.y <= 1.0;
    }
}

pub(crate) fn run_enemy_ai(
    time: Res<Time>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut player_query: Query<
        (&Transform, &mut PlayerState, &mut LinearVelocity),
        (With<Player>, Without<Enemy>),
    >,
    mut enemy_query: Query<
        (&Transform, &mut EnemyState, &mut LinearVelocity),
        (With<Enemy>, Without<Player>),
    >,
) {
    let dt = time.delta_secs();
    let mut player = player_query.single_mut().ok();
    let player_at = player
        .as_ref()
        .filter(|(_, state, _)| !state.is_down())
        .map(|(transform, _, _)| transform.translation.truncate());
    let mut feedback = Feedback::new(&mut *progress, &mut effects);

    for (transform, mut enemy, mut velocity) in &mut enemy_query {
        let at = transform.translation.truncate();
        let senses = EnemySenses {
            position: at,
            player: player_at,
            grounded: enemy.grounded,
        };
        let intent = enemy.think(dt, &senses);

        if let Some(vx) = intent.velocity_x {
            velocity.x = vx;
        }
        if let Some(vy) = intent.jump_velocity {
            velocity.y = vy;
            enemy.grounded = false;
        }
        if !intent.strike {
            continue;
        }
        let (Some(target), Some((_, player_state, player_velocity))) = (player_at, player.as_mut())
        else {
            continue;
        };
        let contact = PlayerContact {
            state: &mut **player_state,
            at: target,
            velocity: &mut player_velocity.0,
        };
        if let Some(outcome) = resolve_ai_strike(&enemy, at, contact, &mut feedback) {
            debug!("Enemy strike: {:?}", outcome);
        }
    }
}

pub(crate) fn remove_defeated_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut EnemyState), With<Enemy>>,
) {
    let dt = time.delta_secs();
    for (entity, mut enemy) in &mut query {
        if enemy.tick_corpse(dt) {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn tint_enemies(mut query: Query<(&EnemyState, &mut Sprite), With<Enemy>>) {
    for (enemy, mut sprite) in &mut query {
        let base = enemy.flavor.variant().color;
        sprite.color = if enemy.is_dead() {
            base.with_alpha(0.4)
        } else if enemy.state == AiState::Stunned && enemy.state_time < HURT_FLASH {
            Color::srgb_u8(0xff, 0x66, 0x66)
        } else {
            base
        };
    }
}
