//! Player domain: spawning and per-frame drivers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{Effect, EffectSink, Extent, GameLayer, Progress};
use crate::input::ActiveInput;
use crate::player::costume::CostumeId;
use crate::player::powerups::PowerUpKind;
use crate::player::resources::PlayerTuning;
use crate::player::state::{GroundChange, Player, PlayerState};

/// Probe length below the feet.
const GROUND_PROBE: f32 = 4.0;

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub state: PlayerState,
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

impl PlayerBundle {
    pub fn new(position: Vec2, tuning: &PlayerTuning, costume: CostumeId) -> Self {
        let variant = costume.variant();
        let size = Vec2::new(tuning.width, tuning.height) * variant.size_scale;
        Self {
            player: Player,
            state: PlayerState::new(tuning),
            extent: Extent::from_size(size),
            sprite: Sprite {
                color: variant.primary,
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 1.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_layers: CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(1.0),
            friction: Friction::new(0.0),
        }
    }
}

pub(crate) fn tick_player(
    time: Res<Time>,
    mut effects: MessageWriter<Effect>,
    mut query: Query<&mut PlayerState, With<Player>>,
) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        state.tick(dt, &mut effects);
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut effects: MessageWriter<Effect>,
    mut query: Query<(&Transform, &Extent, &LinearVelocity, &mut PlayerState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, extent, velocity, mut state) in &mut query {
        let feet = transform.translation.truncate() - Vec2::new(0.0, extent.half.y);
        let hit = spatial_query.cast_ray(feet, Dir2::NEG_Y, GROUND_PROBE, true, &ground_filter);

        match state.set_grounded(hit.is_some(), velocity.y, &tuning) {
            GroundChange::Landed => {
                debug!("Landed at ({:.0}, {:.0})", feet.x, feet.y);
                effects.play(Effect::Landing { at: feet });
            }
            GroundChange::LeftGround => debug!("Left ground"),
            GroundChange::Unchanged => {}
        }
    }
}

/// Feed input to the player and apply locomotion. Skipped while no input
/// device is available or the player is waiting to respawn.
pub(crate) fn drive_player(
    input: Res<ActiveInput>,
    tuning: Res<PlayerTuning>,
    mut effects: MessageWriter<Effect>,
    mut query: Query<
        (
            &Transform,
            &mut PlayerState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let Some(snapshot) = input.snapshot else {
        return;
    };

    for (transform, mut state, mut velocity, mut gravity) in &mut query {
        if state.is_down() {
            continue;
        }
        state.observe_input(&snapshot);
        let at = transform.translation.truncate();
        let scale =
            state.apply_movement(&snapshot, &mut velocity.0, &tuning, &mut effects, at);
        if gravity.0 != scale {
            gravity.0 = scale;
        }
    }
}

/// Tint the player for the strongest active power-up, else the costume color.
pub(crate) fn tint_player(
    time: Res<Time>,
    progress: Res<Progress>,
    mut query: Query<(&PlayerState, &mut Sprite), With<Player>>,
) {
    let base = progress.current_costume().variant().primary;
    for (state, mut sprite) in &mut query {
        let color = if state.has_power_up(PowerUpKind::Invincibility) {
            let pulse = (time.elapsed_secs() * 12.0).sin() * 0.25 + 0.75;
            Color::srgba(1.0, 0.84, 0.0, pulse)
        } else if state.has_power_up(PowerUpKind::FlyMode) {
            Color::srgb_u8(0x98, 0xfb, 0x98)
        } else if state.has_power_up(PowerUpKind::FireBreath)
            || state.has_power_up(PowerUpKind::UltraBlast)
        {
            Color::srgb_u8(0xff, 0x45, 0x00)
        } else {
            base
        };
        sprite.color = color;
    }
}
