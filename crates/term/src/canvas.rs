//! `Canvas` implementation over a framebuffer region.
//!
//! World pixels map onto terminal cells at a fixed scale: one 101x83 px tile
//! becomes 10 columns by 3 rows. Everything is clipped to the playfield, and
//! glyphs keep the background of the lane they are drawn over.

use crate::core::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::{SpriteSheet, MISSING_GLYPH};
use crate::types::{TextAlign, GRID_COLS, TILE_HEIGHT, TILE_WIDTH};

pub const COLS_PER_TILE: u16 = 10;
pub const ROWS_PER_TILE: u16 = 3;

/// Playfield width in cells.
pub const PLAYFIELD_COLS: u16 = GRID_COLS as u16 * COLS_PER_TILE;

/// Playfield height in cells (the full canvas height, rounded up).
pub const PLAYFIELD_ROWS: u16 = 22;

/// World x to playfield column.
#[inline]
pub fn col_of(x: f32) -> i32 {
    (x * COLS_PER_TILE as f32 / TILE_WIDTH).floor() as i32
}

/// World y to playfield row.
#[inline]
pub fn row_of(y: f32) -> i32 {
    (y * ROWS_PER_TILE as f32 / TILE_HEIGHT).floor() as i32
}

pub struct TermCanvas<'a> {
    fb: &'a mut FrameBuffer,
    sheet: &'a SpriteSheet,
    origin_x: i32,
    origin_y: i32,
}

impl<'a> TermCanvas<'a> {
    /// Draw into `fb` with the playfield's top-left cell at `(origin_x, origin_y)`.
    pub fn new(
        fb: &'a mut FrameBuffer,
        sheet: &'a SpriteSheet,
        origin_x: u16,
        origin_y: u16,
    ) -> Self {
        Self {
            fb,
            sheet,
            origin_x: origin_x as i32,
            origin_y: origin_y as i32,
        }
    }

    fn plot(&mut self, col: i32, row: i32, ch: char, style: CellStyle) {
        if col < 0 || row < 0 || col >= PLAYFIELD_COLS as i32 || row >= PLAYFIELD_ROWS as i32 {
            return;
        }
        let x = self.origin_x + col;
        let y = self.origin_y + row;
        let bg = u16::try_from(x)
            .ok()
            .zip(u16::try_from(y).ok())
            .and_then(|(x, y)| self.fb.get(x, y))
            .map_or(style.bg, |cell| cell.style.bg);
        self.fb.put_char(x, y, ch, CellStyle { bg, ..style });
    }
}

impl Canvas for TermCanvas<'_> {
    fn draw_image(&mut self, sprite: &str, x: f32, y: f32) {
        let Some(sprite) = self.sheet.get(sprite) else {
            let style = CellStyle::new(Rgb::new(255, 0, 255), Rgb::new(0, 0, 0)).bold();
            self.plot(col_of(x), row_of(y), MISSING_GLYPH, style);
            return;
        };

        let left = col_of(x + sprite.anchor_x);
        let top = row_of(y + sprite.anchor_y);
        let style = sprite.style;
        for (dy, line) in sprite.art.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.plot(left + dx as i32, top + dy as i32, ch, style);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let len = text.chars().count() as i32;
        let col = col_of(x);
        let start = match align {
            TextAlign::Left => col,
            TextAlign::Right => col - len + 1,
        };
        let row = row_of(y);
        let style = CellStyle::new(Rgb::new(250, 220, 40), Rgb::new(0, 0, 0)).bold();
        for (i, ch) in text.chars().enumerate() {
            self.plot(start + i as i32, row, ch, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BUG_SPRITE, CANVAS_HEIGHT, PLAYER_SPRITE};

    fn blank() -> FrameBuffer {
        FrameBuffer::new(PLAYFIELD_COLS, PLAYFIELD_ROWS)
    }

    #[test]
    fn playfield_covers_canvas_height() {
        assert!(PLAYFIELD_ROWS as i32 > row_of(CANVAS_HEIGHT - 1.0));
    }

    #[test]
    fn tile_corners_map_to_cell_grid() {
        assert_eq!(col_of(0.0), 0);
        assert_eq!(col_of(101.0), 10);
        assert_eq!(col_of(-80.0), -8);
        assert_eq!(row_of(83.0), 3);
        assert_eq!(row_of(-25.0), -1);
    }

    #[test]
    fn player_sprite_lands_in_its_tile() {
        let mut fb = blank();
        let sheet = SpriteSheet::classic();
        TermCanvas::new(&mut fb, &sheet, 0, 0).draw_image(PLAYER_SPRITE, 200.0, 385.0);

        // (200+30, 385+70) px → column 22, row 16 (bottom grass tile)
        assert_eq!(fb.row_text(16).trim(), "\\(o)/");
        assert_eq!(fb.get(22, 16).unwrap().ch, '\\');
    }

    #[test]
    fn offscreen_bug_is_clipped() {
        let mut fb = blank();
        let sheet = SpriteSheet::classic();
        TermCanvas::new(&mut fb, &sheet, 0, 0).draw_image(BUG_SPRITE, -80.0, 61.0);

        // Starts at column -8: the top row is fully off-board, only the
        // body's nose reaches column 0.
        assert_eq!(fb.row_text(4).trim_end(), "");
        assert_eq!(fb.row_text(5).trim_end(), ">");
    }

    #[test]
    fn unknown_sprite_draws_placeholder() {
        let mut fb = blank();
        let sheet = SpriteSheet::new();
        TermCanvas::new(&mut fb, &sheet, 0, 0).draw_image("images/rock.png", 101.0, 83.0);
        assert_eq!(fb.get(10, 3).unwrap().ch, MISSING_GLYPH);
    }

    #[test]
    fn right_aligned_text_ends_at_anchor() {
        let mut fb = blank();
        let sheet = SpriteSheet::new();
        TermCanvas::new(&mut fb, &sheet, 0, 0).draw_text("Wins: 3", 500.0, 40.0, TextAlign::Right);

        let row = fb.row_text(1);
        assert!(row.ends_with("Wins: 3"), "row was {row:?}");
    }

    #[test]
    fn glyphs_keep_lane_background() {
        let mut fb = blank();
        let water = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(20, 60, 160));
        fb.fill_rect(0, 0, PLAYFIELD_COLS, 3, ' ', water);

        let sheet = SpriteSheet::new();
        TermCanvas::new(&mut fb, &sheet, 0, 0).draw_text("hi", 0.0, 0.0, TextAlign::Left);
        assert_eq!(fb.get(0, 0).unwrap().style.bg, water.bg);
    }

    #[test]
    fn origin_shifts_output() {
        let mut fb = FrameBuffer::new(PLAYFIELD_COLS + 4, PLAYFIELD_ROWS + 2);
        let sheet = SpriteSheet::new();
        TermCanvas::new(&mut fb, &sheet, 2, 1).draw_text("x", 0.0, 0.0, TextAlign::Left);
        assert_eq!(fb.get(2, 1).unwrap().ch, 'x');
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }
}
