//! Audio playback by asset identifier.

use super::assets::{AssetCatalog, Sound};
use std::io::{self, Write};

/// Something that can play a loaded sound.
pub trait AudioSink {
    fn play(&mut self, sound: &Sound) -> io::Result<()>;
}

/// Rings the terminal bell once per `Sound::bells`.
pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, sound: &Sound) -> io::Result<()> {
        if self.muted {
            return Ok(());
        }
        for _ in 0..sound.bells {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

/// Look up `key` in the catalog and play it. Unknown keys and sink errors are
/// logged and otherwise ignored; a missing sound never stops the game.
pub fn play_by_key(catalog: &AssetCatalog, sink: &mut impl AudioSink, key: &str) -> bool {
    let Some(sound) = catalog.audio(key) else {
        tracing::debug!(key, "no audio asset loaded");
        return false;
    };
    match sink.play(sound) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "audio playback failed");
            false
        }
    }
}
