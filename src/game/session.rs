//! Play session: owns the active round, the state registry used to restart
//! it, the random source, and the fixed-step clock.

use super::round::RoundController;
use super::types::{CollisionPolicy, RoundEvent, RoundState};
use crate::constants::{MAIN_STATE, MAX_FRAME_MS, PHYSICS_TICK_MS};
use crate::engine::StateRegistry;
use crate::input::FlappyInput;
use rand::Rng;

pub struct Session<R: Rng> {
    states: StateRegistry<RoundController>,
    round: RoundController,
    rng: R,
    policy: CollisionPolicy,
    accumulated_ms: u64,
    best_score: u32,
    rounds_played: u32,
    muted: bool,
    sounds: Vec<&'static str>,
}

impl<R: Rng> Session<R> {
    pub fn new(policy: CollisionPolicy, rng: R) -> Self {
        let mut states = StateRegistry::new();
        states.add(MAIN_STATE, move || RoundController::new(policy));
        let round = states
            .start(MAIN_STATE)
            .unwrap_or_else(|| RoundController::new(policy));

        let mut session = Self {
            states,
            round,
            rng,
            policy,
            accumulated_ms: 0,
            best_score: 0,
            rounds_played: 0,
            muted: false,
            sounds: Vec::new(),
        };
        session.collect_events();
        session
    }

    /// Apply one input. Returns false when the player asked to quit.
    pub fn handle_input(&mut self, input: FlappyInput) -> bool {
        match input {
            FlappyInput::Jump => self.round.jump(),
            FlappyInput::Restart => {
                self.restart();
            }
            FlappyInput::ToggleMute => {
                self.muted = !self.muted;
                tracing::info!(muted = self.muted, "bell toggled");
            }
            FlappyInput::Quit => return false,
            FlappyInput::Other => {}
        }
        self.settle();
        true
    }

    /// Advance wall-clock time by `dt_ms`, clamped to `MAX_FRAME_MS`.
    ///
    /// Time is consumed in fixed physics steps. Within each step the spawn
    /// timer fires first, then physics runs. Leftover time carries over.
    pub fn advance(&mut self, dt_ms: u64) {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
        let dt = PHYSICS_TICK_MS as f64 / 1000.0;

        while self.accumulated_ms >= PHYSICS_TICK_MS {
            self.accumulated_ms -= PHYSICS_TICK_MS;
            self.round.advance_clock(PHYSICS_TICK_MS, &mut self.rng);
            self.round.tick(dt);
            self.settle();
        }
        self.collect_events();
    }

    /// Replace an ended round with a fresh one. No-op while the round is running.
    pub fn restart(&mut self) -> bool {
        if self.round.state != RoundState::Ended {
            return false;
        }
        tracing::info!("round restarted by player");
        self.begin_round();
        self.accumulated_ms = 0;
        true
    }

    /// Apply a restart the round asked for, then gather its events.
    fn settle(&mut self) {
        if self.round.restart_pending() {
            self.begin_round();
        }
        self.collect_events();
    }

    /// Swap in a fresh round built by the registry. Every restart, automatic
    /// or requested, goes through here.
    fn begin_round(&mut self) {
        self.collect_events();
        let policy = self.policy;
        self.round = self
            .states
            .start(MAIN_STATE)
            .unwrap_or_else(|| RoundController::new(policy));
        self.collect_events();
    }

    fn collect_events(&mut self) {
        for event in self.round.drain_events() {
            match event {
                RoundEvent::Started => self.rounds_played += 1,
                RoundEvent::ColumnSpawned { score } => {
                    self.best_score = self.best_score.max(score);
                }
                RoundEvent::Crashed { score } | RoundEvent::LeftScreen { score } => {
                    tracing::debug!(score, best = self.best_score, "round over");
                }
                RoundEvent::Sound(key) => self.sounds.push(key),
            }
        }
    }

    /// Sound keys queued since the last call, in order.
    pub fn take_sounds(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.sounds)
    }

    pub fn round(&self) -> &RoundController {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut RoundController {
        &mut self.round
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
