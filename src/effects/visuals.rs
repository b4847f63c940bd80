//! Effects domain: how each gameplay effect looks.

use bevy::prelude::*;

use crate::core::{CollectColor, Effect};
use crate::player::AttackKind;

/// Where a visual appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    World(Vec2),
    /// On the player, for effects that carry no position.
    Player,
}

/// A short-lived shape, optionally with a floating caption.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectVisual {
    pub anchor: Anchor,
    pub size: Vec2,
    pub color: Color,
    pub lifetime: f32,
    /// Drift in pixels per second.
    pub velocity: Vec2,
    /// Size multiplier gained per second.
    pub growth: f32,
    pub caption: Option<String>,
}

impl EffectVisual {
    fn burst(anchor: Anchor, size: f32, color: Color, lifetime: f32) -> Self {
        Self {
            anchor,
            size: Vec2::splat(size),
            color,
            lifetime,
            velocity: Vec2::ZERO,
            growth: 1.5,
            caption: None,
        }
    }

    fn with_caption(mut self, caption: String) -> Self {
        self.caption = Some(caption);
        self.velocity = Vec2::new(0.0, 60.0);
        self
    }
}

pub fn collect_color(color: CollectColor) -> Color {
    match color {
        CollectColor::Common => Color::srgb_u8(0xc0, 0xc0, 0xc0),
        CollectColor::Rare => Color::srgb_u8(0x41, 0x69, 0xe1),
        CollectColor::Epic => Color::srgb_u8(0x93, 0x70, 0xdb),
        CollectColor::Coin => Color::srgb_u8(0xff, 0xd7, 0x00),
        CollectColor::PowerUp => Color::srgb_u8(0xff, 0x14, 0x93),
    }
}

fn attack_color(kind: AttackKind) -> Color {
    match kind {
        AttackKind::Kick => Color::srgb_u8(0xff, 0xff, 0x00),
        AttackKind::Punch => Color::srgb_u8(0xff, 0xa5, 0x00),
        AttackKind::FireBreath => Color::srgb_u8(0xff, 0x45, 0x00),
        AttackKind::UltraBlast => Color::srgb_u8(0x00, 0xff, 0xff),
    }
}

fn attack_size(kind: AttackKind) -> f32 {
    match kind {
        AttackKind::Kick => 30.0,
        AttackKind::Punch => 22.0,
        AttackKind::FireBreath => 60.0,
        AttackKind::UltraBlast => 120.0,
    }
}

pub fn visual_for(effect: &Effect) -> EffectVisual {
    let white = Color::WHITE;
    match *effect {
        Effect::Jump { at } => EffectVisual::burst(Anchor::World(at), 12.0, white, 0.25),
        Effect::DoubleJump { at } => {
            EffectVisual::burst(Anchor::World(at), 20.0, Color::srgb_u8(0x87, 0xce, 0xeb), 0.3)
        }
        Effect::Landing { at } => EffectVisual {
            size: Vec2::new(28.0, 4.0),
            ..EffectVisual::burst(Anchor::World(at), 0.0, Color::srgb(0.8, 0.8, 0.7), 0.2)
        },
        Effect::Attack { kind, at, hit } => {
            let alpha = if hit { 0.9 } else { 0.4 };
            EffectVisual::burst(
                Anchor::World(at),
                attack_size(kind),
                attack_color(kind).with_alpha(alpha),
                0.2,
            )
        }
        Effect::PowerUpStarted { kind } => {
            EffectVisual::burst(Anchor::Player, 50.0, collect_color(CollectColor::PowerUp), 0.6)
                .with_caption(kind.label().to_string())
        }
        Effect::PowerUpExpired { kind } => {
            EffectVisual::burst(Anchor::Player, 30.0, Color::srgb(0.5, 0.5, 0.5), 0.6)
                .with_caption(format!("{} ended", kind.label()))
        }
        Effect::PlayerHurt { amount } => {
            EffectVisual::burst(Anchor::Player, 36.0, Color::srgb_u8(0xff, 0x00, 0x00), 0.3)
                .with_caption(format!("-{}", amount.round() as i32))
        }
        Effect::DamageBlocked => {
            EffectVisual::burst(Anchor::Player, 48.0, Color::srgb_u8(0xff, 0xd7, 0x00), 0.3)
        }
        Effect::PlayerRespawned { at } => {
            EffectVisual::burst(Anchor::World(at), 64.0, Color::srgb_u8(0x98, 0xfb, 0x98), 0.8)
        }
        Effect::EnemyStrike { at } => {
            EffectVisual::burst(Anchor::World(at), 40.0, Color::srgb_u8(0xff, 0x00, 0x00), 0.2)
        }
        Effect::EnemyHurt { at, amount } => {
            EffectVisual::burst(Anchor::World(at), 24.0, Color::srgb_u8(0xff, 0x66, 0x66), 0.25)
                .with_caption(format!("{}", amount.round() as i32))
        }
        Effect::EnemyDefeated { at } => {
            EffectVisual::burst(Anchor::World(at), 70.0, Color::srgb(0.3, 0.3, 0.3), 0.5)
        }
        Effect::Stomp { at, points, combo } => {
            let caption = if combo > 1 {
                format!("STOMP x{} +{}", combo, points)
            } else {
                format!("STOMP +{}", points)
            };
            EffectVisual::burst(Anchor::World(at), 50.0, Color::srgb_u8(0xff, 0xd7, 0x00), 0.8)
                .with_caption(caption)
        }
        Effect::Collected { at, color } => {
            EffectVisual::burst(Anchor::World(at), 30.0, collect_color(color), 0.4)
        }
    }
}
