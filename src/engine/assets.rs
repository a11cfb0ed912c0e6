//! Asset catalog keyed by string identifier.
//!
//! Images are terminal glyph sprites; audio clips are bell cues.

use ratatui::style::Color;
use std::collections::HashMap;

/// A sprite drawn as a single repeated glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: char,
    pub color: Color,
}

/// A sound played on the terminal bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    pub bells: u8,
}

#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<String, Sprite>,
    sounds: HashMap<String, Sound>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_image(&mut self, key: &str, sprite: Sprite) {
        self.images.insert(key.to_string(), sprite);
    }

    pub fn load_audio(&mut self, key: &str, sound: Sound) {
        self.sounds.insert(key.to_string(), sound);
    }

    pub fn image(&self, key: &str) -> Option<&Sprite> {
        self.images.get(key)
    }

    pub fn audio(&self, key: &str) -> Option<&Sound> {
        self.sounds.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let mut catalog = AssetCatalog::new();
        catalog.load_image(
            "pipe",
            Sprite {
                glyph: '█',
                color: Color::Green,
            },
        );
        catalog.load_audio("jump", Sound { bells: 1 });

        assert_eq!(catalog.image("pipe").map(|s| s.glyph), Some('█'));
        assert_eq!(catalog.audio("jump"), Some(&Sound { bells: 1 }));
        assert!(catalog.image("jump").is_none());
        assert!(catalog.audio("pipe").is_none());
    }
}
