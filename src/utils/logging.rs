//! File logging. Stdout belongs to the terminal UI, so log lines go to
//! `flappy.log` in the data directory instead.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

pub const LOG_FILE: &str = "flappy.log";

/// Parse a level name ("trace", "debug", "info", "warn", "error"),
/// case-insensitively. Unknown names fall back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Install a global subscriber writing to the log file. Returns the file path.
pub fn init_logging(level: Level) -> io::Result<PathBuf> {
    let path = super::persistence::data_dir()?.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
