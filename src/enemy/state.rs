//! Enemy domain: the patrol/chase/attack/stunned state machine.

use bevy::prelude::*;

use crate::combat::PlayerAttack;
use crate::core::{Cooldown, Effect, EffectSink, ProgressSink};
use crate::enemy::resources::{EnemyFlavor, EnemyTuning};

#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
    Attack,
    Stunned,
}

/// Final stats after the flavor is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub attack_delay: f32,
    pub patrol_speed_factor: f32,
    pub give_up_factor: f32,
    pub stun_duration: f32,
    pub chase_jump_velocity: f32,
    pub chase_jump_height: f32,
    pub strike_knockback: f32,
    pub kill_bonus: u32,
    pub death_delay: f32,
}

impl EnemyStats {
    pub fn new(tuning: &EnemyTuning, flavor: EnemyFlavor) -> Self {
        let variant = flavor.variant();
        Self {
            max_health: tuning.health * variant.health,
            speed: tuning.speed * variant.speed,
            damage: tuning.damage * variant.damage,
            attack_range: tuning.attack_range,
            detection_range: tuning.detection_range * variant.detection,
            attack_delay: tuning.attack_delay * variant.attack_delay,
            patrol_speed_factor: tuning.patrol_speed_factor,
            give_up_factor: tuning.give_up_factor,
            stun_duration: tuning.stun_duration,
            chase_jump_velocity: tuning.chase_jump_velocity,
            chase_jump_height: tuning.chase_jump_height,
            strike_knockback: tuning.strike_knockback,
            kill_bonus: tuning.kill_bonus,
            death_delay: tuning.death_delay,
        }
    }
}

/// What the enemy knows this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySenses {
    pub position: Vec2,
    /// `None` when there is no live player to react to.
    pub player: Option<Vec2>,
    pub grounded: bool,
}

/// What the enemy wants the body to do. `None` fields leave velocity alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyIntent {
    pub velocity_x: Option<f32>,
    pub jump_velocity: Option<f32>,
    /// Swing at the player this frame.
    pub strike: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyHit {
    /// The enemy was already dead.
    Ignored,
    Hurt { remaining: f32 },
    Killed,
}

#[derive(Component, Debug, Clone)]
pub struct EnemyState {
    pub stats: EnemyStats,
    pub flavor: EnemyFlavor,
    pub health: f32,
    pub state: AiState,
    pub facing_right: bool,
    pub grounded: bool,
    pub patrol_start: f32,
    pub patrol_end: f32,
    pub attack_cooldown: Cooldown,
    pub stun: Cooldown,
    /// Seconds since the last state change.
    pub state_time: f32,
    pub death_timer: Cooldown,
    kill_awarded: bool,
}

impl EnemyState {
    pub fn new(tuning: &EnemyTuning, flavor: EnemyFlavor, spawn_x: f32) -> Self {
        let stats = EnemyStats::new(tuning, flavor);
        Self {
            stats,
            flavor,
            health: stats.max_health,
            state: AiState::Patrol,
            facing_right: true,
            grounded: false,
            patrol_start: spawn_x,
            patrol_end: spawn_x + tuning.patrol_distance,
            attack_cooldown: Cooldown::ready(),
            stun: Cooldown::ready(),
            state_time: 0.0,
            death_timer: Cooldown::ready(),
            kill_awarded: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        if self.stats.max_health <= 0.0 {
            0.0
        } else {
            self.health / self.stats.max_health
        }
    }

    fn change_state(&mut self, next: AiState) {
        if self.state != next {
            debug!("Enemy {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        self.state_time = 0.0;
    }

    /// One AI frame. Dead enemies do nothing.
    pub fn think(&mut self, dt: f32, senses: &EnemySenses) -> EnemyIntent {
        if self.is_dead() {
            return EnemyIntent::default();
        }
        self.attack_cooldown.tick(dt);
        self.state_time += dt;

        let mut intent = EnemyIntent::default();
        let here = senses.position;

        match self.state {
            AiState::Stunned => {
                self.stun.tick(dt);
                if self.stun.is_ready() {
                    self.change_state(AiState::Chase);
                }
            }
            AiState::Patrol => {
                intent.velocity_x = Some(self.patrol_velocity(here.x));
                let spotted = senses
                    .player
                    .is_some_and(|player| here.distance(player) < self.stats.detection_range);
                if spotted {
                    self.change_state(AiState::Chase);
                }
            }
            AiState::Chase => {
                let Some(player) = senses.player else {
                    self.change_state(AiState::Patrol);
                    return intent;
                };
                let direction = if player.x < here.x { -1.0 } else { 1.0 };
                intent.velocity_x = Some(direction * self.stats.speed);
                self.facing_right = direction > 0.0;
                if player.y > here.y + self.stats.chase_jump_height && senses.grounded {
                    intent.jump_velocity = Some(self.stats.chase_jump_velocity);
                }

                let distance = here.distance(player);
                if distance < self.stats.attack_range && self.attack_cooldown.is_ready() {
                    self.change_state(AiState::Attack);
                } else if distance > self.stats.detection_range * self.stats.give_up_factor {
                    self.change_state(AiState::Patrol);
                }
            }
            AiState::Attack => {
                intent.velocity_x = Some(0.0);
                intent.strike = true;
                self.attack_cooldown.start(self.stats.attack_delay);
                self.change_state(AiState::Chase);
            }
        }
        intent
    }

    fn patrol_velocity(&mut self, x: f32) -> f32 {
        if self.facing_right && x >= self.patrol_end {
            self.facing_right = false;
        } else if !self.facing_right && x <= self.patrol_start {
            self.facing_right = true;
        }
        let speed = self.stats.speed * self.stats.patrol_speed_factor;
        if self.facing_right { speed } else { -speed }
    }

    /// Start the strike cooldown if it is ready. Used by contact hits.
    pub fn try_begin_strike(&mut self) -> bool {
        if self.is_dead() || !self.attack_cooldown.is_ready() {
            return false;
        }
        self.attack_cooldown.start(self.stats.attack_delay);
        true
    }

    pub fn take_damage<S>(&mut self, amount: f32, sink: &mut S, at: Vec2) -> EnemyHit
    where
        S: ProgressSink + EffectSink,
    {
        if self.is_dead() {
            return EnemyHit::Ignored;
        }
        let amount = amount.max(0.0);
        self.health = (self.health - amount).max(0.0);
        self.stun.start(self.stats.stun_duration);
        self.change_state(AiState::Stunned);
        sink.play(Effect::EnemyHurt { at, amount });
        debug!(
            "Enemy took {} damage, health {}/{}",
            amount, self.health, self.stats.max_health
        );

        if self.health > 0.0 {
            return EnemyHit::Hurt {
                remaining: self.health,
            };
        }
        if !self.kill_awarded {
            self.kill_awarded = true;
            sink.add_score(self.stats.kill_bonus);
        }
        self.death_timer.start(self.stats.death_delay);
        sink.play(Effect::EnemyDefeated { at });
        info!("Enemy defeated ({:?})", self.flavor);
        EnemyHit::Killed
    }

    /// Apply a player attack: damage plus any knockback on `velocity`.
    pub fn on_player_attack<S>(
        &mut self,
        attack: &PlayerAttack,
        velocity: &mut Vec2,
        sink: &mut S,
        at: Vec2,
    ) -> EnemyHit
    where
        S: ProgressSink + EffectSink,
    {
        let hit = self.take_damage(attack.damage, sink, at);
        if hit != EnemyHit::Ignored {
            attack.knockback.apply(velocity);
        }
        hit
    }

    /// Count down the corpse timer. True once the body should be removed.
    pub fn tick_corpse(&mut self, dt: f32) -> bool {
        if !self.is_dead() {
            return false;
        }
        self.death_timer.tick(dt);
        self.death_timer.is_ready()
    }
}
