//! GameView: maps a `GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws the static lanes and the frame,
//! then lets the game render its entities through a [`TermCanvas`].

use crate::canvas::{TermCanvas, PLAYFIELD_COLS, PLAYFIELD_ROWS, ROWS_PER_TILE};
use crate::core::{GameState, RandomSource};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::sprites::SpriteSheet;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terrain of one tile row, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Water,
    Stone,
    Grass,
}

/// The classic board: water, three stone lanes, two grass rows.
pub const LANES: [Lane; 6] = [
    Lane::Water,
    Lane::Stone,
    Lane::Stone,
    Lane::Stone,
    Lane::Grass,
    Lane::Grass,
];

impl Lane {
    fn style(self) -> (char, CellStyle) {
        match self {
            Lane::Water => ('~', CellStyle::new(Rgb::new(120, 170, 255), Rgb::new(20, 60, 160))),
            Lane::Stone => (' ', CellStyle::new(Rgb::new(90, 90, 90), Rgb::new(120, 120, 120))),
            Lane::Grass => ('"', CellStyle::new(Rgb::new(60, 140, 60), Rgb::new(40, 110, 40))),
        }
    }
}

pub struct GameView {
    sprites: SpriteSheet,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(SpriteSheet::classic())
    }
}

impl GameView {
    pub fn new(sprites: SpriteSheet) -> Self {
        Self { sprites }
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport. The playfield is centered; if the viewport is smaller it is
    /// clipped at the right and bottom.
    pub fn render_into<R: RandomSource>(
        &self,
        state: &GameState<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame_w = PLAYFIELD_COLS + 2;
        let frame_h = PLAYFIELD_ROWS + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;
        let field_x = start_x + 1;
        let field_y = start_y + 1;

        self.draw_lanes(fb, field_x, field_y);
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        let mut canvas = TermCanvas::new(fb, &self.sprites, field_x, field_y);
        state.render(&mut canvas);

        let hint = CellStyle {
            fg: Rgb::new(140, 140, 140),
            ..CellStyle::default()
        };
        fb.put_str(
            start_x as i32,
            (start_y + frame_h) as i32,
            "arrows/wasd: move   q: quit",
            hint,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource>(&self, state: &GameState<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_lanes(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        for (i, lane) in LANES.iter().enumerate() {
            let (ch, style) = lane.style();
            let top = y as i32 + (i as i32) * ROWS_PER_TILE as i32;
            fb.fill_rect(x as i32, top, PLAYFIELD_COLS, ROWS_PER_TILE, ch, style);
        }
        let used = LANES.len() as u16 * ROWS_PER_TILE;
        let margin = CellStyle::new(Rgb::new(60, 60, 60), Rgb::new(25, 25, 25));
        fb.fill_rect(
            x as i32,
            (y + used) as i32,
            PLAYFIELD_COLS,
            PLAYFIELD_ROWS - used,
            ' ',
            margin,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let (x, y, r, b) = (x as i32, y as i32, (x + w - 1) as i32, (y + h - 1) as i32);

    fb.put_char(x, y, '┌', style);
    fb.put_char(r, y, '┐', style);
    fb.put_char(x, b, '└', style);
    fb.put_char(r, b, '┘', style);
    for dx in x + 1..r {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, b, '─', style);
    }
    for dy in y + 1..b {
        fb.put_char(x, dy, '│', style);
        fb.put_char(r, dy, '│', style);
    }
}
