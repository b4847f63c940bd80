//! Effects domain: turning effect messages into fading sprites.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{Cooldown, Effect};
use crate::effects::visuals::{Anchor, visual_for};
use crate::player::Player;

const EFFECT_Z: f32 = 3.0;
const CAPTION_SECONDS: f32 = 0.6;

/// Time left before the visual is removed.
#[derive(Component, Debug)]
pub struct EffectLifetime {
    pub remaining: Cooldown,
    pub total: f32,
    /// Alpha at spawn; fades linearly to zero.
    pub alpha: f32,
}

impl EffectLifetime {
    pub fn new(seconds: f32, alpha: f32) -> Self {
        Self {
            remaining: Cooldown::running(seconds),
            total: seconds,
            alpha,
        }
    }

    /// Current alpha for the time left.
    pub fn faded_alpha(&self) -> f32 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.alpha * (self.remaining.remaining() / self.total).clamp(0.0, 1.0)
    }
}

#[derive(Component, Debug)]
pub struct EffectMotion {
    pub velocity: Vec2,
    pub growth: f32,
}

pub(crate) fn spawn_effect_visuals(
    mut commands: Commands,
    mut effects: MessageReader<Effect>,
    player_query: Query<&Transform, With<Player>>,
) {
    if effects.is_empty() {
        return;
    }
    let player_at = player_query
        .single()
        .map(|transform| transform.translation.truncate())
        .ok();

    for effect in effects.read() {
        let visual = visual_for(effect);
        let at = match visual.anchor {
            Anchor::World(at) => at,
            Anchor::Player => match player_at {
                Some(at) => at,
                None => continue,
            },
        };
        let lifetime = EffectLifetime::new(visual.lifetime, visual.color.alpha());
        let motion = EffectMotion {
            velocity: visual.velocity,
            growth: visual.growth,
        };

        commands.spawn((
            Sprite {
                color: visual.color,
                custom_size: Some(visual.size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, EFFECT_Z),
            lifetime,
            motion,
        ));

        if let Some(caption) = visual.caption {
            commands.spawn((
                Text2d::new(caption),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(at.x, at.y + visual.size.y / 2.0 + 10.0, EFFECT_Z + 0.1),
                EffectLifetime::new(visual.lifetime.max(CAPTION_SECONDS), 1.0),
                EffectMotion {
                    velocity: Vec2::new(0.0, 60.0),
                    growth: 0.0,
                },
            ));
        }
    }
}

pub(crate) fn animate_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut EffectLifetime,
        &EffectMotion,
        &mut Transform,
        Option<&mut Sprite>,
        Option<&mut TextColor>,
    )>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime, motion, mut transform, sprite, text_color) in &mut query {
        lifetime.remaining.tick(dt);
        if lifetime.remaining.is_ready() {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += (motion.velocity * dt).extend(0.0);
        transform.scale += Vec3::splat(motion.growth * dt);

        let alpha = lifetime.faded_alpha();
        if let Some(mut sprite) = sprite {
            sprite.color.set_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0.set_alpha(alpha);
        }
    }
}
