//! UI domain: player health bar in the top-left corner.

use bevy::prelude::*;

use crate::player::{Player, PlayerState};

pub(crate) const BAR_SIZE: Vec2 = Vec2::new(200.0, 20.0);
pub(crate) const HUD_MARGIN: f32 = 16.0;

#[derive(Component)]
pub struct HealthBarFill;

#[derive(Component)]
pub struct HealthLabel;

pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN),
            column_gap: Val::Px(8.0),
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(BAR_SIZE.x),
                    height: Val::Px(BAR_SIZE.y),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                BorderColor::all(Color::WHITE),
            ))
            .with_children(|frame| {
                frame.spawn((
                    HealthBarFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(health_bar_color(1.0)),
                ));
            });
            row.spawn((
                HealthLabel,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Green above 60 %, yellow above 30 %, red below.
pub(crate) fn health_bar_color(fraction: f32) -> Color {
    if fraction > 0.6 {
        Color::srgb_u8(0x00, 0xff, 0x00)
    } else if fraction > 0.3 {
        Color::srgb_u8(0xff, 0xff, 0x00)
    } else {
        Color::srgb_u8(0xff, 0x00, 0x00)
    }
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&PlayerState, (With<Player>, Changed<PlayerState>)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
    mut label_query: Query<&mut Text, With<HealthLabel>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let fraction = if player.max_health > 0.0 {
        (player.health / player.max_health).clamp(0.0, 1.0)
    } else {
        0.0
    };

    for (mut node, mut background) in &mut fill_query {
        node.width = Val::Percent(fraction * 100.0);
        background.0 = health_bar_color(fraction);
    }
    for mut text in &mut label_query {
        text.0 = format!("{:.0}/{:.0}", player.health.max(0.0), player.max_health);
    }
}
