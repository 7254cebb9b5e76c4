//! Sprite sheet: resolves sprite ids to glyph art.
//!
//! This is the terminal stand-in for an image loader. Ids are the image paths
//! the game configuration refers to; ids with no entry fall back to a single
//! placeholder glyph so a misconfigured sprite stays visible instead of
//! failing the frame.

use std::collections::HashMap;

use crate::fb::{CellStyle, Rgb};
use crate::types::{BUG_SPRITE, PLAYER_SPRITE};

/// Glyph art for one sprite.
///
/// `anchor_x`/`anchor_y` place the art's top-left corner relative to the
/// entity position, in world pixels. Spaces in `art` are transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub art: &'static [&'static str],
    pub style: CellStyle,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

/// Drawn for ids the sheet does not know.
pub const MISSING_GLYPH: char = '?';

#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    sprites: HashMap<String, Sprite>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player and bug art for the stock board.
    pub fn classic() -> Self {
        let mut sheet = Self::new();
        sheet.insert(
            PLAYER_SPRITE,
            Sprite {
                art: &["\\(o)/", " / \\ "],
                style: CellStyle::new(Rgb::new(250, 250, 250), Rgb::new(0, 0, 0)).bold(),
                anchor_x: 30.0,
                anchor_y: 70.0,
            },
        );
        sheet.insert(
            BUG_SPRITE,
            Sprite {
                art: &[" ,-.,-.,  ", "<(oo)===>"],
                style: CellStyle::new(Rgb::new(230, 60, 50), Rgb::new(0, 0, 0)).bold(),
                anchor_x: 0.0,
                anchor_y: 75.0,
            },
        );
        sheet
    }

    pub fn insert(&mut self, id: impl Into<String>, sprite: Sprite) {
        self.sprites.insert(id.into(), sprite);
    }

    pub fn get(&self, id: &str) -> Option<&Sprite> {
        self.sprites.get(id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_sheet_knows_both_characters() {
        let sheet = SpriteSheet::classic();
        assert_eq!(sheet.len(), 2);
        assert!(sheet.get(PLAYER_SPRITE).is_some());
        assert!(sheet.get(BUG_SPRITE).is_some());
        assert!(sheet.get("images/gem-blue.png").is_none());
    }

    #[test]
    fn art_rows_fit_one_tile() {
        let sheet = SpriteSheet::classic();
        for id in [PLAYER_SPRITE, BUG_SPRITE] {
            let sprite = sheet.get(id).unwrap();
            assert!(sprite.art.len() <= 3, "{id} too tall");
            assert!(sprite.art.iter().all(|row| row.chars().count() <= 10), "{id} too wide");
        }
    }
}
