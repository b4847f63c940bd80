//! Collectible domain: spawning and magnet drift.

use bevy::prelude::*;

use crate::collectible::components::{Collectible, CollectibleKind, magnet_step};
use crate::core::Extent;
use crate::player::Player;

#[derive(Bundle)]
pub struct CollectibleBundle {
    pub collectible: Collectible,
    pub extent: Extent,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl CollectibleBundle {
    pub fn new(kind: CollectibleKind, position: Vec2) -> Self {
        let size = kind.size();
        Self {
            collectible: Collectible::new(kind),
            extent: Extent::from_size(size),
            sprite: Sprite {
                color: kind.color(),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.5),
        }
    }
}

pub(crate) fn attract_collectibles(
    player_query: Query<&Transform, (With<Player>, Without<Collectible>)>,
    mut query: Query<(&Collectible, &mut Transform)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (collectible, mut transform) in &mut query {
        if collectible.is_collected() {
            continue;
        }
        let next = magnet_step(transform.translation.truncate(), target);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
