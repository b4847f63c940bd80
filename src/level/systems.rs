//! Level domain: loading, falls, respawns and level completion.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collectible::{Collectible, CollectibleBundle, CollectibleKind};
use crate::combat::StompCombo;
use crate::content::{LevelCatalog, LevelDef};
use crate::core::{
    Effect, Feedback, GameLayer, GameRng, GameState, JsonFileStore, LevelAdvance, Progress,
    write_save,
};
use crate::enemy::{Enemy, EnemyBundle, EnemyTuning};
use crate::level::components::{ActiveLevel, LevelCompleteTimer, LevelEntity, Platform, Wall};
use crate::player::{Player, PlayerBundle, PlayerDamage, PlayerState, PlayerTuning};

const WALL_THICKNESS: f32 = 20.0;

/// Build the level for `progress.current_level`.
pub(crate) fn spawn_level(
    mut commands: Commands,
    catalog: Res<LevelCatalog>,
    player_tuning: Res<PlayerTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut progress: ResMut<Progress>,
    mut combo: ResMut<StompCombo>,
    mut rng: ResMut<GameRng>,
) {
    let def = catalog.level_or_fallback(progress.current_level);
    progress.start_level();
    combo.reset();

    spawn_geometry(&mut commands, &def);

    commands.spawn((
        PlayerBundle::new(def.spawn.to_vec2(), &player_tuning, progress.current_costume()),
        LevelEntity,
    ));

    for enemy in &def.enemies {
        commands.spawn((
            EnemyBundle::new(enemy.to_vec2(), &enemy_tuning, def.flavor),
            LevelEntity,
        ));
    }

    for part in &def.parts {
        let kind = CollectibleKind::RobotPart {
            part: part.part,
            rarity: part.rarity,
        };
        commands.spawn((
            CollectibleBundle::new(kind, Vec2::new(part.x, part.y)),
            LevelEntity,
        ));
    }
    for power_up in &def.power_ups {
        commands.spawn((
            CollectibleBundle::new(
                CollectibleKind::PowerUp(power_up.kind),
                Vec2::new(power_up.x, power_up.y),
            ),
            LevelEntity,
        ));
    }
    let coins = def.coin_positions(&mut rng.rng);
    let coin_count = coins.len();
    for at in coins {
        commands.spawn((CollectibleBundle::new(CollectibleKind::Coin, at), LevelEntity));
    }

    info!(
        "Level {} \"{}\": {} enemies, {} parts, {} power-ups, {} coins",
        def.number,
        def.name,
        def.enemies.len(),
        def.parts.len(),
        def.power_ups.len(),
        coin_count
    );
    commands.insert_resource(ActiveLevel::from_def(&def));
}

fn spawn_geometry(commands: &mut Commands, def: &LevelDef) {
    let color = def.platform_color();
    let layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    let ground = Vec2::new(def.width, def.ground_height);
    commands.spawn((
        Platform,
        LevelEntity,
        Sprite {
            color,
            custom_size: Some(ground),
            ..default()
        },
        Transform::from_xyz(def.width / 2.0, def.ground_height / 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(ground.x, ground.y),
        layers,
    ));

    for platform in &def.platforms {
        commands.spawn((
            Platform,
            LevelEntity,
            Sprite {
                color,
                custom_size: Some(Vec2::new(platform.width, platform.height)),
                ..default()
            },
            Transform::from_xyz(platform.x, platform.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(platform.width, platform.height),
            layers,
        ));
    }

    // Walls are twice the level height so nothing jumps over them.
    let wall_height = def.height * 2.0;
    for x in [-WALL_THICKNESS / 2.0, def.width + WALL_THICKNESS / 2.0] {
        commands.spawn((
            Wall,
            LevelEntity,
            Transform::from_xyz(x, def.height / 2.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(WALL_THICKNESS, wall_height),
            layers,
        ));
    }
}

/// Falling out of the level costs health and puts the player back at the
/// spawn point.
pub(crate) fn catch_falls(
    level: Option<Res<ActiveLevel>>,
    tuning: Res<PlayerTuning>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut query: Query<(&mut Transform, &mut PlayerState, &mut LinearVelocity), With<Player>>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok((mut transform, mut player, mut velocity)) = query.single_mut() else {
        return;
    };
    if !level.is_out_of_bounds(transform.translation.y) {
        return;
    }

    let mut feedback = Feedback::new(&mut *progress, &mut effects);
    let outcome = player.take_damage(tuning.fall_damage, &mut feedback);
    info!("Player fell out of level {} ({:?})", level.number, outcome);
    if outcome != PlayerDamage::Died {
        transform.translation.x = level.spawn.x;
        transform.translation.y = level.spawn.y;
        velocity.0 = Vec2::ZERO;
    }
}

/// In-place reset for a player whose health ran out.
pub(crate) fn respawn_fallen_player(
    level: Option<Res<ActiveLevel>>,
    mut progress: ResMut<Progress>,
    mut effects: MessageWriter<Effect>,
    mut query: Query<(&mut Transform, &mut PlayerState, &mut LinearVelocity), With<Player>>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok((mut transform, mut player, mut velocity)) = query.single_mut() else {
        return;
    };
    if !player.pending_respawn {
        return;
    }

    let mut feedback = Feedback::new(&mut *progress, &mut effects);
    player.respawn(&mut velocity.0, &mut feedback, level.spawn);
    transform.translation.x = level.spawn.x;
    transform.translation.y = level.spawn.y;
}

pub(crate) fn despawn_collected(mut commands: Commands, query: Query<(Entity, &Collectible)>) {
    for (entity, collectible) in &query {
        if collectible.is_collected() {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn detect_level_complete(
    level: Option<Res<ActiveLevel>>,
    progress: Res<Progress>,
    mut timer: ResMut<LevelCompleteTimer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(level) = level else {
        return;
    };
    if !level.is_complete(progress.parts_this_level) {
        return;
    }
    info!(
        "Level {} complete: score {}, damage taken {}",
        level.number, progress.score, progress.damage_taken
    );
    timer.start();
    next_state.set(GameState::LevelComplete);
}

/// Stop everything in place while the completion banner shows.
pub(crate) fn freeze_level(
    mut query: Query<(&mut LinearVelocity, &mut GravityScale), Or<(With<Player>, With<Enemy>)>>,
) {
    for (mut velocity, mut gravity) in &mut query {
        velocity.0 = Vec2::ZERO;
        gravity.0 = 0.0;
    }
}

/// After the completion delay, move to the next level and save.
pub(crate) fn advance_after_delay(
    time: Res<Time>,
    mut timer: ResMut<LevelCompleteTimer>,
    mut progress: ResMut<Progress>,
    mut store: ResMut<JsonFileStore>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !timer.tick(time.delta_secs()) {
        return;
    }
    let advance = progress.advance_level();
    write_save(&mut store, &progress);
    match advance {
        LevelAdvance::Next(number) => {
            info!("Loading level {}", number);
            next_state.set(GameState::Playing);
        }
        LevelAdvance::GameComplete => {
            info!("All levels complete! Final score {}", progress.score);
            next_state.set(GameState::GameComplete);
        }
    }
}

pub(crate) fn despawn_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<ActiveLevel>();
}
