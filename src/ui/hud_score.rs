//! UI domain: level, score, parts and power-up readout.

use bevy::prelude::*;

use crate::core::Progress;
use crate::level::ActiveLevel;
use crate::player::{Player, PlayerState, PowerUps};
use crate::ui::hud_player::{BAR_SIZE, HUD_MARGIN};

/// Marker for the HUD text column
#[derive(Component)]
pub struct ScoreDisplayUI;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct PartsText;

#[derive(Component)]
pub struct PowerUpText;

pub(crate) fn spawn_score_display_ui(mut commands: Commands) {
    let font = TextFont {
        font_size: 18.0,
        ..default()
    };
    // Position below the health bar
    commands
        .spawn((
            ScoreDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_MARGIN),
                top: Val::Px(HUD_MARGIN + BAR_SIZE.y + 8.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((LevelText, Text::new(""), font.clone(), TextColor(Color::WHITE)));
            parent.spawn((
                ScoreText,
                Text::new("Score: 0"),
                font.clone(),
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
            parent.spawn((
                PartsText,
                Text::new(""),
                font.clone(),
                TextColor(Color::srgb(0.6, 0.85, 1.0)),
            ));
            parent.spawn((
                PowerUpText,
                Text::new(""),
                font,
                TextColor(Color::srgb(1.0, 0.6, 0.3)),
            ));
        });
}

/// "Fire Breath 7s, Fly 2s" for the running power-ups, empty when none are.
pub(crate) fn power_up_summary(power_ups: &PowerUps) -> String {
    power_ups
        .active()
        .map(|kind| format!("{} {}s", kind.label(), power_ups.remaining(kind).ceil() as u32))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn update_score_display(
    progress: Res<Progress>,
    level: Option<Res<ActiveLevel>>,
    mut level_query: Query<&mut Text, (With<LevelText>, Without<ScoreText>, Without<PartsText>)>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LevelText>, Without<PartsText>)>,
    mut parts_query: Query<&mut Text, (With<PartsText>, Without<LevelText>, Without<ScoreText>)>,
) {
    let level_changed = level.as_ref().is_some_and(|level| level.is_changed());
    if !progress.is_changed() && !level_changed {
        return;
    }
    for mut text in &mut score_query {
        **text = format!("Score: {}", progress.score);
    }
    let Some(level) = level else {
        return;
    };
    for mut text in &mut level_query {
        **text = format!("Level {}: {}", level.number, level.name);
    }
    for mut text in &mut parts_query {
        **text = format!(
            "Robot Parts: {}/{} ({} total)",
            progress.parts_this_level,
            level.parts_total,
            progress.total_parts()
        );
    }
}

pub(crate) fn update_power_up_display(
    player_query: Query<&PlayerState, With<Player>>,
    mut text_query: Query<&mut Text, With<PowerUpText>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let summary = power_up_summary(&player.power_ups);
    for mut text in &mut text_query {
        if **text != summary {
            **text = summary.clone();
        }
    }
}
