//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Piece colors indexed by color id; index 0 is the empty cell.
pub const PALETTE_HEX: [Option<&str>; 8] = [
    None,
    Some("#FF5733"), // I
    Some("#33FF57"), // J
    Some("#3357FF"), // L
    Some("#F9FF33"), // O
    Some("#FF33A8"), // S
    Some("#33FFF2"), // T
    Some("#FF33B2"), // Z
];

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Map a cell/color id to its display color.
pub fn color_for(id: u8) -> Option<Rgb> {
    PALETTE_HEX
        .get(id as usize)
        .copied()
        .flatten()
        .and_then(Rgb::from_hex)
}

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board, active piece and score.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left of the board frame plus its outer size, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let (w, h) = self.frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                self.draw_cell(fb, frame, x as i8, y as i8, id);
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                self.draw_cell(fb, frame, x, y, active.color_id);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, &["GAME OVER", "R to restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::fg_on(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put(f.x, f.y, '┌', style);
        fb.put(right, f.y, '┐', style);
        fb.put(f.x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put(x, f.y, '─', style);
            fb.put(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put(f.x, y, '│', style);
            fb.put(right, y, '│', style);
        }
    }

    /// Draw one board cell; rows above or beyond the board are clipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, id: u8) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let (ch, style) = match color_for(id) {
            Some(fg) => ('█', CellStyle::fg_on(fg, WELL_BG).bold()),
            None => ('·', CellStyle::fg_on(Rgb::new(90, 90, 100), WELL_BG).dim()),
        };
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, vp: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= vp.width || vp.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::fg_on(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::fg_on(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = f.y;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &n.to_string(), value);
            y += 3;
        }

        for line in ["←/→ move", "↑ rotate", "↓ drop", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = CellStyle::fg_on(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = f.y + f.h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + i as u16, text, style);
        }
    }
}
