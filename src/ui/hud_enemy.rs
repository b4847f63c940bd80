//! UI domain: health bars floating over enemies.

use bevy::prelude::*;

use crate::core::Extent;
use crate::enemy::{Enemy, EnemyState};

const BAR_WIDTH: f32 = 40.0;
const BAR_HEIGHT: f32 = 4.0;
const BAR_GAP: f32 = 10.0;

/// Background strip, spawned as a child of the enemy so it follows it and
/// goes away with it.
#[derive(Component)]
pub struct EnemyHealthBar;

#[derive(Component)]
pub struct EnemyHealthBarFill;

pub(crate) fn spawn_enemy_healthbars(
    mut commands: Commands,
    enemy_query: Query<(Entity, &Extent), Added<Enemy>>,
) {
    for (enemy, extent) in &enemy_query {
        let above = extent.half.y + BAR_GAP;
        commands.entity(enemy).with_children(|parent| {
            parent
                .spawn((
                    EnemyHealthBar,
                    Sprite {
                        color: Color::srgba(0.1, 0.1, 0.1, 0.8),
                        custom_size: Some(Vec2::new(BAR_WIDTH + 2.0, BAR_HEIGHT + 2.0)),
                        ..default()
                    },
                    Transform::from_xyz(0.0, above, 5.0),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        EnemyHealthBarFill,
                        Sprite {
                            color: Color::srgb(0.8, 0.2, 0.2),
                            custom_size: Some(Vec2::new(BAR_WIDTH, BAR_HEIGHT)),
                            ..default()
                        },
                        Transform::from_xyz(0.0, 0.0, 0.1),
                    ));
                });
        });
    }
}

/// Width of the fill for a health fraction, and its x offset so it stays
/// pinned to the left edge of the bar.
pub(crate) fn fill_layout(fraction: f32) -> (f32, f32) {
    let width = BAR_WIDTH * fraction.clamp(0.0, 1.0);
    (width, -(BAR_WIDTH - width) / 2.0)
}

pub(crate) fn update_enemy_healthbars(
    enemy_query: Query<&EnemyState, With<Enemy>>,
    mut bar_query: Query<(&ChildOf, &mut Visibility), With<EnemyHealthBar>>,
    mut fill_query: Query<(&ChildOf, &mut Transform, &mut Sprite), With<EnemyHealthBarFill>>,
) {
    for (child_of, mut visibility) in &mut bar_query {
        let Ok(enemy) = enemy_query.get(child_of.parent()) else {
            continue;
        };
        let wanted = if enemy.is_dead() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }

    for (child_of, mut transform, mut sprite) in &mut fill_query {
        let Ok((bar_parent, _)) = bar_query.get(child_of.parent()) else {
            continue;
        };
        let Ok(enemy) = enemy_query.get(bar_parent.parent()) else {
            continue;
        };
        let (width, offset) = fill_layout(enemy.health_fraction());
        transform.translation.x = offset;
        sprite.custom_size = Some(Vec2::new(width, BAR_HEIGHT));
    }
}
