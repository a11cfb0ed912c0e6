//! Scene engine primitives the game is built on.
//!
//! Physics bodies and overlap tests, repeating timers, tweens, a named-state
//! registry, an asset catalog and audio playback. Each piece does only what
//! the game needs.

pub mod assets;
pub mod audio;
pub mod physics;
pub mod states;
pub mod timer;
pub mod tween;

pub use assets::{AssetCatalog, Sound, Sprite};
pub use audio::{play_by_key, AudioSink, TerminalBell};
pub use physics::{Aabb, Body};
pub use states::StateRegistry;
pub use timer::{TimerEvents, TimerHandle};
pub use tween::Tween;
