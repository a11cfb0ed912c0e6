//! Round controller: bird physics, scoring, and the round lifecycle.

use super::monitor::CollisionMonitor;
use super::spawner::ObstacleSpawner;
use super::types::{Bird, CollisionPolicy, RoundEvent, RoundState, TerminalReason};
use super::{Terminable, Tickable};
use crate::constants::*;
use crate::engine::{TimerEvents, Tween};
use rand::Rng;

/// One round of play.
///
/// A round never restarts itself. Leaving the screen, or a hit under
/// `CollisionPolicy::Restart`, marks the restart as pending and stops the
/// round; the owner then replaces it with a fresh one.
#[derive(Debug, Clone)]
pub struct RoundController {
    pub bird: Bird,
    pub score: u32,
    /// Text shown by the score label; kept in sync with `score` on every spawn.
    pub score_label: String,
    pub state: RoundState,
    pub spawner: ObstacleSpawner,
    pub policy: CollisionPolicy,
    timers: TimerEvents,
    monitor: CollisionMonitor,
    events: Vec<RoundEvent>,
    restart_pending: bool,
}

impl RoundController {
    /// Create a round that is already started.
    pub fn new(policy: CollisionPolicy) -> Self {
        let mut round = Self {
            bird: Bird::new(),
            score: 0,
            score_label: String::from("0"),
            state: RoundState::Running,
            spawner: ObstacleSpawner::new(),
            policy,
            timers: TimerEvents::new(),
            monitor: CollisionMonitor::new(SCREEN_HEIGHT),
            events: Vec::new(),
            restart_pending: false,
        };
        round.start();
        round
    }

    /// Reset bird, score and obstacles, and arm the spawner.
    pub fn start(&mut self) {
        self.bird = Bird::new();
        self.score = 0;
        self.score_label = self.score.to_string();
        self.state = RoundState::Running;
        self.restart_pending = false;
        self.timers.clear();
        self.spawner = ObstacleSpawner::new();
        self.spawner.arm(&mut self.timers);
        self.events.push(RoundEvent::Started);
        tracing::info!(policy = self.policy.name(), "round started");
    }

    /// Flap. Ignored once the bird is dead or the round is over.
    pub fn jump(&mut self) {
        if !self.bird.alive || self.restart_pending {
            return;
        }
        self.bird.body.velocity_y = JUMP_VELOCITY;

        let mut tween = Tween::to(JUMP_ANGLE, JUMP_TWEEN_MS);
        tween.start(self.bird.angle);
        self.bird.tween = Some(tween);

        self.events.push(RoundEvent::Sound(JUMP_SOUND));
    }

    /// Advance the round's wall-clock timers by `dt_ms`, spawning a column on
    /// every spawner firing.
    pub fn advance_clock<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) {
        if self.restart_pending {
            return;
        }
        for handle in self.timers.advance(dt_ms) {
            if self.spawner.owns(handle) {
                self.add_column(rng);
            }
        }
    }

    fn add_column<R: Rng>(&mut self, rng: &mut R) {
        self.spawner.spawn_column(rng);
        self.score += 1;
        self.score_label = self.score.to_string();
        self.events.push(RoundEvent::ColumnSpawned { score: self.score });
    }

    /// One physics step of `dt` seconds, followed by the collision check.
    pub fn tick(&mut self, dt: f64) {
        if self.restart_pending {
            return;
        }
        self.bird.body.integrate(dt);

        if self.bird.alive {
            self.update_angle(dt);
        }

        self.spawner.scroll(dt);

        if let Some(reason) = self.monitor.check(&self.bird, &self.spawner) {
            self.on_terminal(reason);
        }
    }

    /// The jump tween drives the angle while it runs; otherwise the bird
    /// noses down one step per tick until it reaches the dive angle.
    fn update_angle(&mut self, dt: f64) {
        let dt_ms = (dt * 1000.0).round() as u64;
        match self.bird.tween.as_mut().and_then(|t| t.advance(dt_ms)) {
            Some(angle) => self.bird.angle = angle,
            None => {
                self.bird.tween = None;
                if self.bird.angle < DIVE_ANGLE {
                    self.bird.angle = (self.bird.angle + DIVE_STEP).min(DIVE_ANGLE);
                }
            }
        }
    }

    /// End the round. Leaving the screen always asks for a restart; a
    /// collision follows the configured policy and is ignored if the bird is
    /// already dead. Nothing is signalled once a restart is pending.
    pub fn on_terminal(&mut self, reason: TerminalReason) {
        if self.restart_pending {
            return;
        }
        match reason {
            TerminalReason::OutOfBounds => {
                tracing::info!(score = self.score, "bird left the screen");
                self.events.push(RoundEvent::LeftScreen { score: self.score });
                self.request_restart();
            }
            TerminalReason::Collision => {
                if !self.bird.alive {
                    return;
                }
                tracing::info!(score = self.score, policy = self.policy.name(), "bird hit a pipe");
                self.events.push(RoundEvent::Crashed { score: self.score });
                match self.policy {
                    CollisionPolicy::Restart => self.request_restart(),
                    CollisionPolicy::Freeze => self.freeze(),
                }
            }
        }
    }

    fn freeze(&mut self) {
        self.bird.alive = false;
        self.bird.tween = None;
        self.spawner.disarm(&mut self.timers);
        self.spawner.freeze();
        self.state = RoundState::Ended;
    }

    fn request_restart(&mut self) {
        self.freeze();
        self.restart_pending = true;
    }

    /// True once the round has ended in a way that calls for a fresh round.
    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Tickable for RoundController {
    fn advance(&mut self, dt: f64) {
        self.tick(dt);
    }
}

impl Terminable for RoundController {
    fn on_terminal(&mut self, reason: TerminalReason) {
        RoundController::on_terminal(self, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f64 = PHYSICS_TICK_MS as f64 / 1000.0;

    fn terminal_events(events: &[RoundEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, RoundEvent::Crashed { .. } | RoundEvent::LeftScreen { .. }))
            .count()
    }

    #[test]
    fn test_new_round_is_started() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        assert_eq!(round.score, 0);
        assert_eq!(round.score_label, "0");
        assert!(round.bird.alive);
        assert!(round.spawner.columns().is_empty());
        assert!(round.spawner.is_armed());
        assert!(round.is_running());
        assert_eq!(round.drain_events(), vec![RoundEvent::Started]);
    }

    #[test]
    fn test_gravity_integrates_velocity() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.bird.body.velocity_y = -100.0;
        round.tick(DT);
        assert!((round.bird.velocity() - (-100.0 + GRAVITY * DT)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.bird.body.velocity_y = 420.0;
        round.jump();
        assert!((round.bird.velocity() - JUMP_VELOCITY).abs() < f64::EPSILON);

        round.bird.body.velocity_y = -900.0;
        round.jump();
        assert!((round.bird.velocity() - JUMP_VELOCITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_plays_sound_and_tweens_up() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.drain_events();
        round.bird.angle = 20.0;
        round.jump();
        assert_eq!(round.drain_events(), vec![RoundEvent::Sound(JUMP_SOUND)]);

        // 100ms tween at 16ms per tick lands on the seventh tick
        for _ in 0..7 {
            round.tick(DT);
        }
        assert!((round.bird.angle - JUMP_ANGLE).abs() < 1e-9);
        assert!(round.bird.tween.as_ref().is_some_and(|t| !t.is_running()));

        round.tick(DT);
        assert!((round.bird.angle - (JUMP_ANGLE + DIVE_STEP)).abs() < 1e-9);
    }

    #[test]
    fn test_dive_angle_relaxes_and_clamps() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.tick(DT);
        assert!((round.bird.angle - DIVE_STEP).abs() < 1e-9);

        round.bird.angle = 19.5;
        round.bird.body.y = BIRD_START_Y;
        round.bird.body.velocity_y = 0.0;
        round.tick(DT);
        assert!((round.bird.angle - DIVE_ANGLE).abs() < 1e-9);
    }

    #[test]
    fn test_jump_when_dead_is_noop() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.bird.alive = false;
        round.bird.body.velocity_y = 123.0;
        round.bird.angle = 7.0;
        round.drain_events();

        round.jump();

        assert!((round.bird.velocity() - 123.0).abs() < f64::EPSILON);
        assert!((round.bird.angle - 7.0).abs() < f64::EPSILON);
        assert!(round.bird.tween.is_none());
        assert!(round.drain_events().is_empty());
    }

    #[test]
    fn test_spawn_increments_score_and_label() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        let mut rng = StdRng::seed_from_u64(5);
        round.advance_clock(SPAWN_INTERVAL_MS * 3, &mut rng);
        assert_eq!(round.score, 3);
        assert_eq!(round.score_label, "3");
        assert_eq!(round.spawner.columns().len(), 3);
    }

    #[test]
    fn test_out_of_bounds_requests_restart() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        let mut rng = StdRng::seed_from_u64(5);
        round.advance_clock(SPAWN_INTERVAL_MS, &mut rng);
        round.drain_events();

        round.bird.body.y = SCREEN_HEIGHT + 1.0;
        round.tick(DT);

        assert_eq!(round.drain_events(), vec![RoundEvent::LeftScreen { score: 1 }]);
        assert!(round.restart_pending());
        assert!(!round.spawner.is_armed());

        // Nothing moves or signals until the owner replaces the round
        let y = round.bird.y();
        round.tick(DT);
        round.advance_clock(SPAWN_INTERVAL_MS, &mut rng);
        round.jump();
        assert_eq!(round.bird.y(), y);
        assert_eq!(round.score, 1);
        assert!(round.drain_events().is_empty());
    }

    #[test]
    fn test_start_clears_pending_restart() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.on_terminal(TerminalReason::OutOfBounds);
        assert!(round.restart_pending());

        round.start();
        assert!(!round.restart_pending());
        assert!(round.is_running());
        assert!(round.bird.alive);
    }

    #[test]
    fn test_collision_freezes_round() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        let mut rng = StdRng::seed_from_u64(9);
        round.advance_clock(SPAWN_INTERVAL_MS, &mut rng);
        round.drain_events();

        round.on_terminal(TerminalReason::Collision);

        assert!(!round.bird.alive);
        assert_eq!(round.state, RoundState::Ended);
        assert!(!round.spawner.is_armed());
        assert!(round.spawner.segments().all(|s| s.body.velocity_x == 0.0));
        assert_eq!(round.drain_events(), vec![RoundEvent::Crashed { score: 1 }]);

        // Spawner stays quiet and score stays put
        round.advance_clock(SPAWN_INTERVAL_MS * 2, &mut rng);
        assert_eq!(round.score, 1);
        assert_eq!(round.spawner.columns().len(), 1);
    }

    #[test]
    fn test_second_collision_is_ignored() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.on_terminal(TerminalReason::Collision);
        round.drain_events();
        round.on_terminal(TerminalReason::Collision);
        assert!(round.drain_events().is_empty());
    }

    #[test]
    fn test_dead_bird_keeps_falling_until_it_leaves() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        round.on_terminal(TerminalReason::Collision);
        round.drain_events();

        let angle = round.bird.angle;
        let mut ticks = 0;
        while !round.restart_pending() && ticks < 1000 {
            round.tick(DT);
            ticks += 1;
            assert!((round.bird.angle - angle).abs() < f64::EPSILON);
        }

        assert!(ticks < 1000);
        assert!(round.bird.y() > SCREEN_HEIGHT);
        assert_eq!(terminal_events(&round.drain_events()), 1);
    }

    #[test]
    fn test_restart_policy_requests_restart_on_collision() {
        let mut round = RoundController::new(CollisionPolicy::Restart);
        let mut rng = StdRng::seed_from_u64(2);
        round.advance_clock(SPAWN_INTERVAL_MS * 2, &mut rng);
        round.drain_events();

        round.on_terminal(TerminalReason::Collision);

        assert!(round.restart_pending());
        assert_eq!(round.drain_events(), vec![RoundEvent::Crashed { score: 2 }]);

        // A freeze-policy hit ends the round without asking for a restart
        let mut frozen = RoundController::new(CollisionPolicy::Freeze);
        frozen.on_terminal(TerminalReason::Collision);
        assert!(!frozen.restart_pending());
    }

    #[test]
    fn test_traits_delegate() {
        let mut round = RoundController::new(CollisionPolicy::Freeze);
        let y = round.bird.y();
        Tickable::advance(&mut round, DT);
        assert!(round.bird.y() > y);

        Terminable::on_terminal(&mut round, TerminalReason::Collision);
        assert!(!round.bird.alive);
    }
}
