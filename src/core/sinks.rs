//! Core domain: outbound notification seams used by gameplay rules.
//!
//! Player, enemy and collectible logic never reach for global state. They
//! report through these two traits, which the ECS side implements with the
//! `Progress` resource and a `MessageWriter<Effect>`.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::collectible::{PartType, Rarity};
use crate::player::{AttackKind, PowerUpKind};

/// Score, inventory and damage tracking.
pub trait ProgressSink {
    fn add_score(&mut self, points: u32);
    fn add_inventory_item(&mut self, part: PartType, rarity: Rarity);
    fn on_player_damage(&mut self, amount: f32);
}

/// Fire-and-forget presentation requests.
pub trait EffectSink {
    fn play(&mut self, effect: Effect);
}

/// A transient visual the presentation layer may show. Gameplay never waits
/// on these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Jump { at: Vec2 },
    DoubleJump { at: Vec2 },
    Landing { at: Vec2 },
    Attack { kind: AttackKind, at: Vec2, hit: bool },
    PowerUpStarted { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    PlayerHurt { amount: f32 },
    DamageBlocked,
    PlayerRespawned { at: Vec2 },
    EnemyStrike { at: Vec2 },
    EnemyHurt { at: Vec2, amount: f32 },
    EnemyDefeated { at: Vec2 },
    Stomp { at: Vec2, points: u32, combo: u32 },
    Collected { at: Vec2, color: CollectColor },
}

impl Message for Effect {}

impl EffectSink for MessageWriter<'_, Effect> {
    fn play(&mut self, effect: Effect) {
        self.write(effect);
    }
}

/// Collection flash tint, kept separate from bevy `Color` so effects stay
/// `PartialEq` and cheap to assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectColor {
    Common,
    Rare,
    Epic,
    Coin,
    PowerUp,
}

/// Pairs a progress sink with an effect sink so rules that need both can take a
/// single `&mut` argument.
pub struct Feedback<'a, P, E> {
    pub progress: &'a mut P,
    pub effects: &'a mut E,
}

impl<'a, P, E> Feedback<'a, P, E> {
    pub fn new(progress: &'a mut P, effects: &'a mut E) -> Self {
        Self { progress, effects }
    }
}

impl<P: ProgressSink, E> ProgressSink for Feedback<'_, P, E> {
    fn add_score(&mut self, points: u32) {
        self.progress.add_score(points);
    }

    fn add_inventory_item(&mut self, part: PartType, rarity: Rarity) {
        self.progress.add_inventory_item(part, rarity);
    }

    fn on_player_damage(&mut self, amount: f32) {
        self.progress.on_player_damage(amount);
    }
}

impl<P, E: EffectSink> EffectSink for Feedback<'_, P, E> {
    fn play(&mut self, effect: Effect) {
        self.effects.play(effect);
    }
}

/// Records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub score: Vec<u32>,
    pub items: Vec<(PartType, Rarity)>,
    pub damage: Vec<f32>,
    pub effects: Vec<Effect>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn total_score(&self) -> u32 {
        self.score.iter().sum()
    }

    pub fn count_effects(&self, pred: impl Fn(&Effect) -> bool) -> usize {
        self.effects.iter().filter(|e| pred(e)).count()
    }
}

#[cfg(test)]
impl ProgressSink for RecordingSink {
    fn add_score(&mut self, points: u32) {
        self.score.push(points);
    }

    fn add_inventory_item(&mut self, part: PartType, rarity: Rarity) {
        self.items.push((part, rarity));
    }

    fn on_player_damage(&mut self, amount: f32) {
        self.damage.push(amount);
    }
}

#[cfg(test)]
impl EffectSink for RecordingSink {
    fn play(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}
