//! GameView: maps a [`GameSnapshot`] (plus the last event batch) into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::types::{displayed_value, GameEvents, GRID_SIZE};

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

/// How a tile took part in the last turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Spawned,
    Merged,
}

const GRID_BG: Rgb = Rgb::new(74, 74, 74);
const EMPTY_CELL: Rgb = Rgb::new(69, 69, 69);
const TEXT: Rgb = Rgb::new(160, 160, 160);
const POINTS: Rgb = Rgb::new(0, 221, 0);
const GAME_OVER: Rgb = Rgb::new(238, 0, 0);
const DARK_DIGITS: Rgb = Rgb::new(119, 110, 101);
const LIGHT_DIGITS: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Spacing between tiles (and around the outer ones).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn grid_w(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_w + (GRID_SIZE as u16 + 1) * self.gap
    }

    fn grid_h(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_h + (GRID_SIZE as u16 + 1) * self.gap
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `last` is the most recent event batch; it only affects emphasis
    /// (merged tiles bold, new tiles dim) and the `+points` readout.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        last: Option<&GameEvents>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_w = self.grid_w();
        let grid_h = self.grid_h();
        // title/score row, points row, grid, hint row
        let total_h = 2 + grid_h + 1;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let grid_y = start_y + 2;

        self.draw_header(fb, snap, last, start_x, start_y, grid_w);

        fb.fill_rect(start_x, grid_y, grid_w, grid_h, ' ', CellStyle::new(TEXT, GRID_BG));
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let value = snap.at(x, y);
                let highlight = last.map_or(Highlight::None, |events| highlight_at(events, x, y));
                self.draw_tile(fb, start_x, grid_y, x as u16, y as u16, value, highlight);
            }
        }

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, grid_y, grid_w, grid_h, "game over");
        }

        let hint = "arrows/wasd slide  r restart  q quit";
        let hint_y = grid_y + grid_h;
        if hint_y < viewport.height {
            let w = hint.chars().count() as u16;
            let x = start_x.saturating_add(grid_w.saturating_sub(w) / 2);
            fb.put_str(x, hint_y, hint, CellStyle::default().dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        last: Option<&GameEvents>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, last, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        last: Option<&GameEvents>,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
    ) {
        let label = CellStyle::new(TEXT, Rgb::default()).bold();
        fb.put_str(start_x, start_y, "dmqh", label);

        // Score is right-aligned with the grid edge.
        let right = start_x.saturating_add(grid_w);
        let score_w = digit_count(snap.score);
        let x = right.saturating_sub(score_w + 6);
        let x = fb.put_str(x, start_y, "SCORE ", label);
        fb.put_u32(x, start_y, snap.score, CellStyle::new(TEXT, Rgb::default()));

        if let Some(points) = last.and_then(|events| events.score.difference) {
            let x = right.saturating_sub(digit_count(points) + 1);
            let style = CellStyle::new(POINTS, Rgb::default()).bold();
            let x = fb.put_str(x, start_y + 1, "+", style);
            fb.put_u32(x, start_y + 1, points, style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        grid_y: u16,
        x: u16,
        y: u16,
        value: u8,
        highlight: Highlight,
    ) {
        let px = start_x + self.gap + x * (self.cell_w + self.gap);
        let py = grid_y + self.gap + y * (self.cell_h + self.gap);

        if value == 0 {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(TEXT, EMPTY_CELL));
            return;
        }

        let (bg, fg) = tile_colors(value);
        let mut style = CellStyle::new(fg, bg);
        match highlight {
            Highlight::Merged => style = style.bold(),
            Highlight::Spawned => style = style.dim(),
            Highlight::None => {}
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mid_y = py + self.cell_h / 2;
        let shown = displayed_value(value);
        let w = digit_count(shown);
        if w <= self.cell_w {
            fb.put_u32(px + (self.cell_w - w) / 2, mid_y, shown, style);
        } else {
            // Too wide for the tile; fall back to the exponent.
            let w = 2 + digit_count(value as u32);
            let cx = px + self.cell_w.saturating_sub(w) / 2;
            let cx = fb.put_str(cx, mid_y, "2^", style);
            fb.put_u32(cx, mid_y, value as u32, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(GAME_OVER, Rgb::default()).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Emphasis for the tile at (x, y) given the last turn's events.
pub fn highlight_at(events: &GameEvents, x: u8, y: u8) -> Highlight {
    if events.merges.iter().any(|m| (m.x, m.y) == (x, y)) {
        Highlight::Merged
    } else if events.spawns.iter().any(|s| (s.x, s.y) == (x, y)) {
        Highlight::Spawned
    } else {
        Highlight::None
    }
}

/// Background and digit colors for an exponent.
pub fn tile_colors(value: u8) -> (Rgb, Rgb) {
    match value {
        1 => (Rgb::new(238, 228, 218), DARK_DIGITS),
        2 => (Rgb::new(237, 224, 200), DARK_DIGITS),
        3 => (Rgb::new(242, 177, 121), LIGHT_DIGITS),
        4 => (Rgb::new(245, 149, 99), LIGHT_DIGITS),
        5 => (Rgb::new(246, 124, 95), LIGHT_DIGITS),
        6 => (Rgb::new(246, 94, 59), LIGHT_DIGITS),
        7 => (Rgb::new(237, 207, 114), LIGHT_DIGITS),
        8 => (Rgb::new(237, 204, 97), LIGHT_DIGITS),
        9 => (Rgb::new(237, 200, 80), LIGHT_DIGITS),
        10 => (Rgb::new(237, 197, 63), LIGHT_DIGITS),
        11 => (Rgb::new(237, 194, 46), LIGHT_DIGITS),
        _ => (Rgb::new(60, 58, 50), LIGHT_DIGITS),
    }
}
