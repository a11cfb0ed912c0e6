//! Runtime configuration: `config.json` in the platform config directory,
//! overridden by command-line flags.

use crate::constants::DEFAULT_FRAME_MS;
use crate::game::CollisionPolicy;
use crate::utils::persistence::{config_dir, read_json};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub collision_policy: CollisionPolicy,
    /// Fixed seed for a reproducible pipe layout.
    pub seed: Option<u64>,
    pub log_level: String,
    /// Render and input poll interval.
    pub frame_ms: u64,
    /// Start with the jump bell silenced (M toggles it in game).
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::Freeze,
            seed: None,
            log_level: String::from("info"),
            frame_ms: DEFAULT_FRAME_MS,
            muted: false,
        }
    }
}

impl GameConfig {
    /// Load from the config directory, falling back to defaults.
    ///
    /// Loading happens before logging is up, so the reason for a fallback is
    /// returned for the caller to report. A missing file is not a fallback.
    pub fn load() -> (Self, Option<String>) {
        match config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => (
                Self::default(),
                Some(format!("config directory unavailable: {}", e)),
            ),
        }
    }

    pub fn load_from(path: &Path) -> (Self, Option<String>) {
        match read_json(path) {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Self::default(), None),
            Err(e) => (
                Self::default(),
                Some(format!("ignoring {}: {}", path.display(), e)),
            ),
        }
    }

    /// Apply command-line overrides.
    pub fn apply(&mut self, overrides: &CliOverrides) {
        if overrides.restart_on_hit {
            self.collision_policy = CollisionPolicy::Restart;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        self.frame_ms = self.frame_ms.max(1);
    }
}

pub fn config_path() -> std::io::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Flags that override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub restart_on_hit: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliOverrides),
    Help,
    Version,
}

pub const USAGE: &str = "\
Flappy - terminal Flappy Bird

Usage: flappy [options]

Options:
  --restart-on-hit  Restart immediately when the bird hits a pipe
  --seed <n>        Use a fixed seed for pipe gaps
  --version         Show version information
  --help            Show this help message

Controls: Space/Up/Enter/click to flap, R to restart after a crash, M to mute, Esc/Q to quit";

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut overrides = CliOverrides::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--restart-on-hit" => overrides.restart_on_hit = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| String::from("--seed needs a value"))?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                overrides.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliCommand::Run(overrides))
}
