//! Player domain: the movement, combat and power-up state machine.

use bevy::prelude::*;

use crate::core::{Cooldown, DEATH_PENALTY, Effect, EffectSink, ProgressSink};
use crate::input::{AXIS_DEADZONE, Action, InputCapability, InputEdgeTracker};
use crate::player::powerups::{PowerUpActivation, PowerUpKind, PowerUps};
use crate::player::resources::PlayerTuning;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing toward `dx` (positive is right). Zero keeps `self`.
    pub fn toward(self, dx: f32) -> Facing {
        if dx > 0.0 {
            Facing::Right
        } else if dx < 0.0 {
            Facing::Left
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Kick,
    Punch,
    FireBreath,
    UltraBlast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Ground,
    Double,
    Refused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundChange {
    Unchanged,
    Landed,
    LeftGround,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerDamage {
    /// Invincibility absorbed the hit.
    Blocked,
    Hurt { remaining: f32 },
    Died,
    /// Already dead and waiting for the respawn.
    AlreadyDown,
}

/// Everything the player tracks between frames. Velocity is not stored here;
/// the physics body owns it and callers pass it in.
#[derive(Component, Debug, Clone)]
pub struct PlayerState {
    pub health: f32,
    pub max_health: f32,
    pub facing: Facing,
    pub grounded: bool,
    pub jump_cooldown: Cooldown,
    pub has_double_jumped: bool,
    /// Runs after walking off a ledge; a ground jump is still allowed while it
    /// is running.
    pub coyote: Cooldown,
    pub attack_cooldown: Cooldown,
    pub combo_count: u32,
    pub combo_window: Cooldown,
    pub power_ups: PowerUps,
    pub fire_breath_cooldown: Cooldown,
    pub ultra_blast_cooldown: Cooldown,
    pub edges: InputEdgeTracker,
    /// Set on death; cleared by [`respawn`](Self::respawn).
    pub pending_respawn: bool,
    pub deaths: u32,
}

impl PlayerState {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            health: tuning.max_health,
            max_health: tuning.max_health,
            facing: Facing::Right,
            grounded: false,
            jump_cooldown: Cooldown::ready(),
            has_double_jumped: false,
            coyote: Cooldown::ready(),
            attack_cooldown: Cooldown::ready(),
            combo_count: 0,
            combo_window: Cooldown::ready(),
            power_ups: PowerUps::default(),
            fire_breath_cooldown: Cooldown::ready(),
            ultra_blast_cooldown: Cooldown::ready(),
            edges: InputEdgeTracker::default(),
            pending_respawn: false,
            deaths: 0,
        }
    }

    /// Advance every countdown by `dt`.
    pub fn tick(&mut self, dt: f32, effects: &mut impl EffectSink) {
        self.jump_cooldown.tick(dt);
        self.attack_cooldown.tick(dt);
        self.coyote.tick(dt);
        self.fire_breath_cooldown.tick(dt);
        self.ultra_blast_cooldown.tick(dt);
        if self.combo_window.tick(dt) {
            self.combo_count = 0;
        }
        for kind in self.power_ups.tick(dt) {
            debug!("Power-up expired: {:?}", kind);
            effects.play(Effect::PowerUpExpired { kind });
        }
    }

    pub fn observe_input(&mut self, input: &impl InputCapability) {
        self.edges.observe(input);
    }

    /// Feed the ground probe. Moving upward never counts as standing, so the
    /// frame right after a jump does not read as a landing.
    pub fn set_grounded(
        &mut self,
        on_ground: bool,
        vertical_velocity: f32,
        tuning: &PlayerTuning,
    ) -> GroundChange {
        let now = on_ground && vertical_velocity <= 1.0;
        let was = self.grounded;
        self.grounded = now;
        match (was, now) {
            (false, true) => {
                self.has_double_jumped = false;
                self.coyote.clear();
                GroundChange::Landed
            }
            (true, false) => {
                self.coyote.start(tuning.coyote_time);
                GroundChange::LeftGround
            }
            _ => GroundChange::Unchanged,
        }
    }

    pub fn can_ground_jump(&self) -> bool {
        self.grounded || self.coyote.is_running()
    }

    pub fn try_jump(
        &mut self,
        velocity: &mut Vec2,
        tuning: &PlayerTuning,
        effects: &mut impl EffectSink,
        at: Vec2,
    ) -> JumpOutcome {
        if !self.jump_cooldown.is_ready() {
            return JumpOutcome::Refused;
        }
        if self.can_ground_jump() {
            velocity.y = tuning.jump_velocity;
            self.grounded = false;
            self.coyote.clear();
            self.has_double_jumped = false;
            self.jump_cooldown.start(tuning.jump_cooldown);
            debug!("Jump");
            effects.play(Effect::Jump { at });
            JumpOutcome::Ground
        } else if !self.has_double_jumped {
            velocity.y = tuning.double_jump_velocity;
            self.has_double_jumped = true;
            self.jump_cooldown.start(tuning.jump_cooldown);
            debug!("Double jump");
            effects.play(Effect::DoubleJump { at });
            JumpOutcome::Double
        } else {
            JumpOutcome::Refused
        }
    }

    /// Run speed after power-ups. Derived from the flag each call so the boost
    /// never compounds.
    pub fn effective_speed(&self, tuning: &PlayerTuning) -> f32 {
        if self.power_ups.is_active(PowerUpKind::SpeedBoost) {
            tuning.speed * tuning.speed_boost
        } else {
            tuning.speed
        }
    }

    /// Apply one frame of locomotion to `velocity` and return the gravity
    /// scale the body should use. Call after [`observe_input`](Self::observe_input).
    pub fn apply_movement(
        &mut self,
        input: &impl InputCapability,
        velocity: &mut Vec2,
        tuning: &PlayerTuning,
        effects: &mut impl EffectSink,
        at: Vec2,
    ) -> f32 {
        let h = input.horizontal();
        if h.abs() > AXIS_DEADZONE {
            velocity.x = h * self.effective_speed(tuning);
            self.facing = self.facing.toward(h);
        } else {
            velocity.x *= tuning.friction;
        }

        if self.power_ups.is_active(PowerUpKind::FlyMode) {
            let v = input.vertical();
            if v.abs() > AXIS_DEADZONE {
                velocity.y = v * tuning.speed * tuning.fly_vertical_factor;
            } else {
                velocity.y *= tuning.fly_hover_damping;
            }
            tuning.fly_gravity_scale
        } else {
            if self.edges.rising(Action::Jump) {
                self.try_jump(velocity, tuning, effects, at);
            }
            1.0
        }
    }

    /// Decide which attacks start this frame. Hit detection against enemies is
    /// the caller's job.
    pub fn resolve_combat(&mut self, tuning: &PlayerTuning) -> Vec<AttackKind> {
        let mut attacks = Vec::new();
        if self.attack_cooldown.is_running() {
            return attacks;
        }

        if self.edges.rising(Action::Kick) {
            self.start_basic_attack(tuning.kick_cooldown, tuning);
            attacks.push(AttackKind::Kick);
        } else if self.edges.rising(Action::Punch) {
            self.start_basic_attack(tuning.punch_cooldown, tuning);
            attacks.push(AttackKind::Punch);
        }

        if self.power_ups.is_active(PowerUpKind::FireBreath)
            && self.fire_breath_cooldown.is_ready()
            && self.edges.held(Action::Kick)
            && self.edges.held(Action::Punch)
        {
            self.fire_breath_cooldown.start(tuning.fire_breath_cooldown);
            attacks.push(AttackKind::FireBreath);
        }

        if self.power_ups.is_active(PowerUpKind::UltraBlast)
            && self.ultra_blast_cooldown.is_ready()
            && self.edges.rising(Action::Punch)
            && self.combo_count >= tuning.ultra_blast_min_combo
        {
            self.ultra_blast_cooldown.start(tuning.ultra_blast_cooldown);
            attacks.push(AttackKind::UltraBlast);
        }

        if !attacks.is_empty() {
            debug!("Attacks {:?}, combo {}", attacks, self.combo_count);
        }
        attacks
    }

    fn start_basic_attack(&mut self, cooldown: f32, tuning: &PlayerTuning) {
        self.attack_cooldown.start(cooldown);
        self.combo_count += 1;
        self.combo_window.start(tuning.combo_window);
    }

    pub fn has_power_up(&self, kind: PowerUpKind) -> bool {
        self.power_ups.is_active(kind)
    }

    pub fn activate_power_up(
        &mut self,
        kind: PowerUpKind,
        duration: f32,
        effects: &mut impl EffectSink,
    ) -> PowerUpActivation {
        let outcome = self.power_ups.activate(kind, duration);
        info!("Power-up {:?}: {:?} for {}s", kind, outcome, duration);
        effects.play(Effect::PowerUpStarted { kind });
        outcome
    }

    pub fn take_damage<S>(&mut self, amount: f32, sink: &mut S) -> PlayerDamage
    where
        S: ProgressSink + EffectSink,
    {
        if self.pending_respawn {
            return PlayerDamage::AlreadyDown;
        }
        if self.power_ups.is_active(PowerUpKind::Invincibility) {
            debug!("Damage blocked by invincibility");
            sink.play(Effect::DamageBlocked);
            return PlayerDamage::Blocked;
        }

        let amount = amount.max(0.0);
        self.health = (self.health - amount).clamp(0.0, self.max_health);
        sink.on_player_damage(amount);
        sink.play(Effect::PlayerHurt { amount });
        debug!("Player took {} damage, health {}/{}", amount, self.health, self.max_health);

        if self.health <= 0.0 {
            self.pending_respawn = true;
            self.deaths += 1;
            info!("Player died ({} deaths this run)", self.deaths);
            PlayerDamage::Died
        } else {
            PlayerDamage::Hurt {
                remaining: self.health,
            }
        }
    }

    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.health;
        self.health = (self.health + amount.max(0.0)).min(self.max_health);
        self.health - before
    }

    pub fn is_down(&self) -> bool {
        self.pending_respawn
    }

    /// In-place reset after death: full health, zero velocity, cleared jump
    /// and combo state. Power-ups survive. The caller moves the body to the
    /// spawn point.
    pub fn respawn<S>(&mut self, velocity: &mut Vec2, sink: &mut S, at: Vec2)
    where
        S: ProgressSink + EffectSink,
    {
        self.health = self.max_health;
        self.pending_respawn = false;
        *velocity = Vec2::ZERO;
        self.grounded = false;
        self.has_double_jumped = false;
        self.coyote.clear();
        self.jump_cooldown.clear();
        self.attack_cooldown.clear();
        self.combo_count = 0;
        self.combo_window.clear();
        self.edges.reset();
        sink.on_player_damage(DEATH_PENALTY);
        sink.play(Effect::PlayerRespawned { at });
        info!("Player respawned at ({:.0}, {:.0})", at.x, at.y);
    }
}
