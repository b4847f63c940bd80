//! Core domain: physics layers and the bounding extents used for overlap tests.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering. Bodies only collide with level
/// geometry; gameplay overlaps go through [`Extent`] instead.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms
    Ground,
    Player,
    Enemy,
    Pickup,
}

/// Axis-aligned half-size of an entity, centred on its translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub half: Vec2,
}

impl Extent {
    pub fn from_size(size: Vec2) -> Self {
        Self { half: size * 0.5 }
    }

    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    /// True when the boxes at `a` and `b` intersect. Touching edges do not count.
    pub fn overlaps(&self, a: Vec2, other: &Extent, b: Vec2) -> bool {
        let gap = (a - b).abs();
        let reach = self.half + other.half;
        gap.x < reach.x && gap.y < reach.y
    }
}
