//! The player bird: flap physics, the timed invulnerability skill, and
//! collision outcomes.
//!
//! The player never calls into the game session. Everything it wants to
//! announce goes into an event queue that the session drains once per tick.

use crate::core::constants::{
    FLAP_IMPULSE, GRAVITY, INVULNERABILITY_SECONDS, PLAYER_RADIUS, PLAYER_X,
    SKILL2_BASE_COOLDOWN, SKILL2_LEVEL2_COOLDOWN, SKILL2_LEVEL3_COOLDOWN, WORLD_HALF_HEIGHT,
};
use crate::core::{Scheduler, TimerHandle};
use crate::entities::Vec2;
use crate::game::GameTask;
use crate::input::FlapKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Flapped,
    /// Pool slot of the coin that was taken.
    CoinTaken(usize),
    Died,
    Respawned,
    SkillActivated,
    SkillEnded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub alive: bool,
    pub invulnerable: bool,
    /// Seconds accumulated toward the next skill activation.
    pub skill_timer: f64,
    pub skill_cooldown: f64,
    pub flap_key: FlapKey,
}

/// Skill cooldown in seconds for a skill 2 level.
pub fn skill2_cooldown(level: u8) -> f64 {
    match level {
        0 | 1 => SKILL2_BASE_COOLDOWN,
        2 => SKILL2_LEVEL2_COOLDOWN,
        _ => SKILL2_LEVEL3_COOLDOWN,
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub state: PlayerState,
    pub position: Vec2,
    pub velocity: Vec2,
    invulnerability_end: Option<TimerHandle>,
    events: Vec<PlayerEvent>,
}

impl Player {
    pub fn new(skill2_level: u8, flap_key: FlapKey) -> Self {
        Self {
            state: PlayerState {
                alive: true,
                invulnerable: false,
                skill_timer: 0.0,
                skill_cooldown: skill2_cooldown(skill2_level),
                flap_key,
            },
            position: Vec2::new(PLAYER_X, 0.0),
            velocity: Vec2::ZERO,
            invulnerability_end: None,
            events: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive
    }

    pub fn is_invulnerable(&self) -> bool {
        self.state.invulnerable
    }

    pub fn radius(&self) -> f64 {
        PLAYER_RADIUS
    }

    /// Seconds until the skill fires again, for the HUD.
    pub fn skill_remaining(&self) -> f64 {
        (self.state.skill_cooldown - self.state.skill_timer).max(0.0)
    }

    /// One frame of player logic. `flap` is the input edge for this frame.
    pub fn update(&mut self, dt: f64, flap: bool, scheduler: &mut Scheduler<GameTask>) {
        if !self.state.alive {
            return;
        }
        self.apply_flap_and_gravity(dt, flap);
        self.auto_use_skill(dt, scheduler);
    }

    fn apply_flap_and_gravity(&mut self, dt: f64, flap: bool) {
        self.velocity.y -= GRAVITY * dt;

        if flap {
            self.velocity = Vec2::ZERO;
            self.velocity.y += FLAP_IMPULSE;
            self.events.push(PlayerEvent::Flapped);
        }

        self.position.y += self.velocity.y * dt;

        // Floor and ceiling are solid; touching them is a hazard contact handled by the session.
        let limit = WORLD_HALF_HEIGHT - PLAYER_RADIUS;
        if self.position.y > limit {
            self.position.y = limit;
            self.velocity.y = self.velocity.y.min(0.0);
        } else if self.position.y < -limit {
            self.position.y = -limit;
            self.velocity.y = self.velocity.y.max(0.0);
        }
    }

    fn auto_use_skill(&mut self, dt: f64, scheduler: &mut Scheduler<GameTask>) {
        if self.state.skill_timer < self.state.skill_cooldown {
            self.state.skill_timer += dt;
            return;
        }

        self.state.skill_timer = 0.0;
        self.state.invulnerable = true;
        if let Some(previous) = self.invulnerability_end.take() {
            scheduler.cancel(previous);
        }
        self.invulnerability_end =
            Some(scheduler.after(INVULNERABILITY_SECONDS, GameTask::EndInvulnerability));
        self.events.push(PlayerEvent::SkillActivated);
    }

    /// Timer callback for the end of the skill window.
    pub fn end_invulnerability(&mut self) {
        self.invulnerability_end = None;
        if self.state.invulnerable {
            self.state.invulnerable = false;
            self.events.push(PlayerEvent::SkillEnded);
        }
    }

    /// Whether the body touches the floor or ceiling.
    pub fn touches_world_edge(&self) -> bool {
        self.position.y.abs() + PLAYER_RADIUS >= WORLD_HALF_HEIGHT - 1e-9
    }

    /// Contact with a hazard.
    pub fn on_hazard(&mut self) {
        if self.state.alive && !self.state.invulnerable {
            self.death();
        }
    }

    /// Contact with a collectible in pool slot `index`. The session deactivates the coin.
    pub fn on_coin(&mut self, index: usize) -> bool {
        if !self.state.alive {
            return false;
        }
        self.events.push(PlayerEvent::CoinTaken(index));
        true
    }

    fn death(&mut self) {
        self.state.alive = false;
        self.velocity = Vec2::ZERO;
        self.events.push(PlayerEvent::Died);
    }

    pub fn respawn(&mut self, scheduler: &mut Scheduler<GameTask>) {
        self.cancel_timers(scheduler);
        self.state.skill_timer = 0.0;
        self.state.alive = true;
        self.state.invulnerable = false;
        self.position = Vec2::new(PLAYER_X, 0.0);
        self.velocity = Vec2::ZERO;
        self.events.push(PlayerEvent::Respawned);
    }

    /// Drop any pending skill timer. Must run before the player is discarded.
    pub fn cancel_timers(&mut self, scheduler: &mut Scheduler<GameTask>) {
        if let Some(handle) = self.invulnerability_end.take() {
            scheduler.cancel(handle);
        }
    }

    pub fn has_pending_skill_end(&self) -> bool {
        self.invulnerability_end.is_some()
    }

    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, Scheduler<GameTask>) {
        (Player::new(1, FlapKey::default()), Scheduler::new())
    }

    #[test]
    fn test_cooldown_by_level() {
        assert_eq!(skill2_cooldown(0), 9.0);
        assert_eq!(skill2_cooldown(1), 9.0);
        assert_eq!(skill2_cooldown(2), 8.0);
        assert_eq!(skill2_cooldown(3), 7.0);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let (mut p, mut s) = setup();
        p.update(0.1, false, &mut s);
        assert!(p.velocity.y < 0.0);
        assert!(p.position.y < 0.0);
    }

    #[test]
    fn test_flap_resets_then_impulses() {
        let (mut p, mut s) = setup();
        for _ in 0..20 {
            p.update(0.016, false, &mut s);
        }
        assert!(p.velocity.y < -1.0);
        p.update(0.016, true, &mut s);
        assert_eq!(p.velocity.y, FLAP_IMPULSE);
        assert_eq!(p.drain_events(), vec![PlayerEvent::Flapped]);
    }

    #[test]
    fn test_dead_player_ignores_input() {
        let (mut p, mut s) = setup();
        p.on_hazard();
        let y = p.position.y;
        p.update(0.5, true, &mut s);
        assert_eq!(p.position.y, y);
        assert_eq!(p.drain_events(), vec![PlayerEvent::Died]);
    }

    #[test]
    fn test_skill_fires_after_cooldown() {
        let (mut p, mut s) = setup();
        let dt = 0.1;
        let mut activated = false;
        for _ in 0..100 {
            p.update(dt, true, &mut s);
            if p.drain_events().contains(&PlayerEvent::SkillActivated) {
                activated = true;
                break;
            }
        }
        assert!(activated);
        assert!(p.is_invulnerable());
        assert!(s.is_task_scheduled(GameTask::EndInvulnerability));
    }

    #[test]
    fn test_invulnerability_blocks_hazard() {
        let (mut p, mut s) = setup();
        p.state.skill_timer = p.state.skill_cooldown;
        p.update(0.016, false, &mut s);
        assert!(p.is_invulnerable());
        p.on_hazard();
        assert!(p.is_alive());

        let fired = s.advance(INVULNERABILITY_SECONDS);
        assert_eq!(fired, vec![GameTask::EndInvulnerability]);
        p.end_invulnerability();
        assert!(!p.is_invulnerable());
        p.on_hazard();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_coin_pickup_event() {
        let (mut p, _) = setup();
        assert!(p.on_coin(3));
        assert_eq!(p.drain_events(), vec![PlayerEvent::CoinTaken(3)]);
        p.on_hazard();
        assert!(!p.on_coin(1));
    }

    #[test]
    fn test_respawn_resets_and_cancels_timer() {
        let (mut p, mut s) = setup();
        p.state.skill_timer = p.state.skill_cooldown;
        p.update(0.016, false, &mut s);
        assert!(p.has_pending_skill_end());
        p.state.invulnerable = false;
        p.on_hazard();

        p.respawn(&mut s);
        assert!(p.is_alive());
        assert!(!p.is_invulnerable());
        assert_eq!(p.state.skill_timer, 0.0);
        assert_eq!(p.position, Vec2::new(PLAYER_X, 0.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(!p.has_pending_skill_end());
        assert!(s.advance(10.0).is_empty());
    }

    #[test]
    fn test_floor_clamps_and_is_touching() {
        let (mut p, mut s) = setup();
        for _ in 0..200 {
            p.update(0.016, false, &mut s);
        }
        assert!(p.touches_world_edge());
        assert!(p.position.y >= -WORLD_HALF_HEIGHT);
    }
}
