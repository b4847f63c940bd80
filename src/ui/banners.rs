//! UI domain: level-complete and game-complete overlays, and costume unlock
//! notices.

use bevy::prelude::*;

use crate::core::{Cooldown, FINAL_LEVEL, Progress};
use crate::level::ActiveLevel;

const UNLOCK_NOTICE_SECONDS: f32 = 3.0;

/// Marker for the level-complete overlay
#[derive(Component, Debug)]
pub struct LevelCompleteUI;

/// Marker for the game-complete overlay
#[derive(Component, Debug)]
pub struct GameCompleteUI;

/// A "costume unlocked" line that fades out on its own.
#[derive(Component, Debug)]
pub struct UnlockNotice {
    pub lifetime: Cooldown,
}

fn overlay_root() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        position_type: PositionType::Absolute,
        flex_direction: FlexDirection::Column,
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn title(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(16.0)),
            ..default()
        },
    )
}

pub(crate) fn spawn_level_complete_banner(
    mut commands: Commands,
    level: Option<Res<ActiveLevel>>,
    progress: Res<Progress>,
) {
    let heading = match level {
        Some(level) => format!("Level {} Complete!", level.number),
        None => "Level Complete!".to_string(),
    };
    let next = if progress.current_level >= FINAL_LEVEL {
        "The robot is almost ready...".to_string()
    } else {
        format!("Next up: level {}", progress.current_level + 1)
    };

    commands
        .spawn((
            LevelCompleteUI,
            overlay_root(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn(title(heading, 48.0, Color::WHITE));
            parent.spawn(title(
                format!("Score: {}", progress.score),
                24.0,
                Color::srgb(0.9, 0.85, 0.5),
            ));
            parent.spawn(title(next, 20.0, Color::srgb(0.7, 0.7, 0.8)));
        });
}

pub(crate) fn cleanup_level_complete_banner(
    mut commands: Commands,
    query: Query<Entity, With<LevelCompleteUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn spawn_game_complete_banner(mut commands: Commands, progress: Res<Progress>) {
    commands
        .spawn((
            GameCompleteUI,
            overlay_root(),
            BackgroundColor(Color::srgba(0.02, 0.05, 0.1, 0.95)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn(title("ROBOT COMPLETE", 64.0, Color::srgb(0.95, 0.85, 0.3)));
            parent.spawn(title(
                format!("Final score: {}", progress.score),
                28.0,
                Color::WHITE,
            ));
            parent.spawn(title(
                format!(
                    "Robot parts: {}  Costumes: {}",
                    progress.total_parts(),
                    progress.outfits.unlocked.len()
                ),
                20.0,
                Color::srgb(0.6, 0.6, 0.7),
            ));
        });
}

/// Show a notice for each costume unlocked since the last frame.
pub(crate) fn announce_unlocks(mut commands: Commands, mut progress: ResMut<Progress>) {
    if progress.fresh_unlocks.is_empty() {
        return;
    }
    let unlocked: Vec<_> = progress.fresh_unlocks.drain(..).collect();
    for (i, costume) in unlocked.into_iter().enumerate() {
        commands.spawn((
            UnlockNotice {
                lifetime: Cooldown::running(UNLOCK_NOTICE_SECONDS),
            },
            Text::new(format!("Costume unlocked: {}", costume.name())),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(costume.variant().primary),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0 + 28.0 * i as f32),
                ..default()
            },
            ZIndex(150),
        ));
    }
}

pub(crate) fn fade_unlock_notices(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut UnlockNotice, &mut TextColor)>,
) {
    for (entity, mut notice, mut color) in &mut query {
        if notice.lifetime.tick(time.delta_secs()) {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = (notice.lifetime.remaining() / UNLOCK_NOTICE_SECONDS).clamp(0.0, 1.0);
        color.0 = color.0.with_alpha(alpha);
    }
}
