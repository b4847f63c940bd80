mod collectible;
mod combat;
mod content;
mod core;
mod effects;
mod enemy;
mod input;
mod level;
mod player;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

/// World gravity in pixels per second squared.
const GRAVITY: f32 = 800.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Taekwondo Robot Builder".to_string(),
                resolution: (1024, 576).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            input::InputPlugin,
            player::PlayerPlugin,
            enemy::EnemyPlugin,
            collectible::CollectiblePlugin,
            combat::CombatPlugin,
            level::LevelPlugin,
            effects::EffectsPlugin,
            ui::UiPlugin,
        ))
        .run();
}
