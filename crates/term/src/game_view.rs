//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Every grid tile is drawn as a filled
//! `cell_w x cell_h` rectangle; the border and the grid marks are drawn on
//! every frame, and the playfield shows either the pieces or, while paused,
//! only the upcoming-piece preview.

use crate::core::{color, shape, shapes::decode, GameSession, PieceSource};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, ShapeKind};

/// Rows reserved under the playfield for the status line.
pub const STATUS_ROWS: u16 = 1;

const BLOCK: char = '█';
const GRID_MARK: char = '·';
const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);

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

/// Where the framed playfield sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Largest grid, in tiles, that fits the viewport with border and status
    /// line.
    pub fn grid_size_for(&self, viewport: Viewport) -> (usize, usize) {
        let inner_w = viewport.width.saturating_sub(2);
        let inner_h = viewport.height.saturating_sub(2 + STATUS_ROWS);
        (
            (inner_w / self.cell_w) as usize,
            (inner_h / self.cell_h) as usize,
        )
    }

    fn frame(&self, grid_w: usize, grid_h: usize, viewport: Viewport) -> Frame {
        let w = clamp_u16(grid_w).saturating_mul(self.cell_w).saturating_add(2);
        let h = clamp_u16(grid_h).saturating_mul(self.cell_h).saturating_add(2);
        let used_h = h.saturating_add(STATUS_ROWS);
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(used_h) / 2,
            w,
            h,
        }
    }

    /// Render one frame of `session` into `fb`, resizing it to the viewport.
    pub fn render_into<S: PieceSource>(
        &self,
        session: &GameSession<S>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid = session.grid();
        let frame = self.frame(grid.width(), grid.height(), viewport);

        self.draw_grid_marks(fb, frame, grid.width(), grid.height());

        if session.is_paused() {
            self.draw_queue_preview(fb, frame, session, grid.width(), grid.height());
        } else {
            for (row, cells) in grid.rows().enumerate() {
                for (col, &value) in cells.iter().enumerate() {
                    if let Some(kind) = ShapeKind::from_cell_value(value) {
                        self.draw_tile(fb, frame, col as u16, row as u16, color(kind));
                    }
                }
            }

            let active = session.active();
            for (row, col) in active.cells() {
                // Cells pushed off the grid by rotation are simply not drawn.
                if grid.get(row, col).is_some() {
                    self.draw_tile(fb, frame, col as u16, row as u16, color(active.kind()));
                }
            }
        }

        self.draw_border(fb, frame);
        self.draw_status(fb, frame, session);

        if session.is_game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: PieceSource>(&self, session: &GameSession<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Screen position of the top-left corner of tile `(col, row)`.
    fn tile_origin(&self, frame: Frame, col: u16, row: u16) -> (u16, u16) {
        (
            frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, fg: Rgb) {
        let (px, py) = self.tile_origin(frame, col, row);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(fg, PLAYFIELD_BG)
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_grid_marks(&self, fb: &mut FrameBuffer, frame: Frame, grid_w: usize, grid_h: usize) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(100, 100, 100), PLAYFIELD_BG)
        };
        for row in 0..clamp_u16(grid_h) {
            for col in 0..clamp_u16(grid_w) {
                let (px, py) = self.tile_origin(frame, col, row);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.set(px, py, style.cell(GRID_MARK));
            }
        }
    }

    /// Upcoming pieces stacked down the right side of the playfield, four
    /// tiles apart, starting two tiles from the top.
    fn draw_queue_preview<S: PieceSource>(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        session: &GameSession<S>,
        grid_w: usize,
        grid_h: usize,
    ) {
        let base_col = grid_w.saturating_sub(4);
        for (i, kind) in session.queue().peek_all().enumerate() {
            for &offset in &shape(kind).offsets {
                let (c, r) = decode(offset);
                let col = base_col + c as usize;
                let row = 2 + i * 4 + r as usize;
                if col < grid_w && row < grid_h {
                    self.draw_tile(fb, frame, col as u16, row as u16, color(kind));
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));

        fb.set(x, y, style.cell('┌'));
        fb.set(x + w - 1, y, style.cell('┐'));
        fb.set(x, y + h - 1, style.cell('└'));
        fb.set(x + w - 1, y + h - 1, style.cell('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.cell('─'));
            fb.set(x + dx, y + h - 1, style.cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.cell('│'));
            fb.set(x + w - 1, y + dy, style.cell('│'));
        }
    }

    fn draw_status<S: PieceSource>(&self, fb: &mut FrameBuffer, frame: Frame, session: &GameSession<S>) {
        let text = if session.is_game_over() {
            "game over"
        } else if session.is_paused() {
            "paused - space to resume"
        } else {
            "←→ move  ↓ drop  ↑ rotate  space pause  esc quit"
        };
        let style = CellStyle {
            dim: !session.is_paused(),
            ..CellStyle::default()
        };
        fb.put_str(frame.x, frame.y.saturating_add(frame.h), text, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        fb.put_str(x, y, text, style);
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, ScriptedSource};
    use crate::types::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH};

    #[test]
    fn grid_size_accounts_for_border_and_status() {
        let view = GameView::default();
        assert_eq!(view.grid_size_for(Viewport::new(22, 23)), (10, 20));
        assert_eq!(view.grid_size_for(Viewport::new(1, 1)), (0, 0));
    }

    #[test]
    fn frame_is_centered_horizontally() {
        let view = GameView::default();
        let frame = view.frame(10, 20, Viewport::new(42, 23));
        assert_eq!(frame, Frame { x: 10, y: 0, w: 22, h: 22 });
    }

    #[test]
    fn status_line_sits_below_the_border() {
        let session = GameSession::new(GameConfig::default(), ScriptedSource::new(vec![0]));
        let fb = GameView::default().render(&session, Viewport::new(60, 23));
        assert!(fb.row_text(22).contains("space pause"));
    }

    #[test]
    fn oversized_tiles_saturate_instead_of_overflowing() {
        let config = GameConfig::new(MAX_GRID_WIDTH, MAX_GRID_HEIGHT, 1).unwrap();
        let session = GameSession::new(config, ScriptedSource::new(vec![0]));
        let view = GameView::new(u16::MAX, u16::MAX);

        assert_eq!(view.tile_origin(Frame { x: 0, y: 0, w: 0, h: 0 }, 3, 3), (u16::MAX, u16::MAX));
        let fb = view.render(&session, Viewport::new(80, 24));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }
}
