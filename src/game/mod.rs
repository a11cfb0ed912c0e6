//! Flappy Bird round logic.
//!
//! A bird falls under gravity and flaps upward on input while pipe columns
//! scroll in from the right every 1.5 seconds. Each column is eight slots
//! tall with a two-slot gap. Leaving the screen restarts the round; hitting
//! a pipe either freezes the round or restarts it, depending on policy.

pub mod monitor;
pub mod round;
pub mod session;
pub mod spawner;
pub mod types;

pub use monitor::CollisionMonitor;
pub use round::RoundController;
pub use session::Session;
pub use spawner::{draw_gap_start, ObstacleSpawner};
pub use types::*;

/// Something driven by the fixed-rate physics tick.
pub trait Tickable {
    /// Advance by `dt` seconds.
    fn advance(&mut self, dt: f64);
}

/// Something that reacts to a round ending.
pub trait Terminable {
    fn on_terminal(&mut self, reason: TerminalReason);
}
