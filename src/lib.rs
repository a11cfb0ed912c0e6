//! Flappy - a terminal Flappy Bird.
//!
//! This library holds the game logic and engine primitives so they can be
//! tested without a terminal. The binary adds rendering and the main loop.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod engine;
pub mod game;
pub mod input;
pub mod utils;

pub use config::GameConfig;
pub use game::{CollisionPolicy, RoundController, Session, TerminalReason};
pub use input::FlappyInput;
