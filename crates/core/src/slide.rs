//! Slide module - line compaction and merge resolution
//!
//! A slide is resolved one line at a time. Every line is walked from the
//! edge the tiles travel towards ("slide order"); non-empty cells are packed
//! into a dense prefix and each pair of adjacent equal values merges once.
//!
//! Resolution is pure: [`Slide::resolve`] reads a grid and describes the
//! outcome tile by tile, [`Slide::apply`] writes it back.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::scoring::score_difference;
use crate::types::{
    Direction, MergeEvent, MoveEvent, StaticEvent, CELL_COUNT, GRID_SIZE, MAX_EXPONENT, MAX_MERGES,
};

/// One line of the grid in slide order.
///
/// Slot `k` of the line is the cell `(x0 + k*dx, y0 + k*dy)`; slot 0 sits on
/// the target edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x0: u8,
    pub y0: u8,
    pub dx: i8,
    pub dy: i8,
}

impl Line {
    /// Coordinates of slot `k`
    #[inline(always)]
    pub fn slot(&self, k: u8) -> (u8, u8) {
        let x = self.x0 as i8 + self.dx * k as i8;
        let y = self.y0 as i8 + self.dy * k as i8;
        (x as u8, y as u8)
    }

    /// The four lines swept by a slide, in sweep order.
    pub fn sweep(direction: Direction) -> [Line; GRID_SIZE as usize] {
        let last = GRID_SIZE - 1;
        let mut lines = [Line {
            x0: 0,
            y0: 0,
            dx: 0,
            dy: 0,
        }; GRID_SIZE as usize];
        for (i, line) in lines.iter_mut().enumerate() {
            let i = i as u8;
            *line = match direction {
                Direction::Up => Line { x0: i, y0: 0, dx: 0, dy: 1 },
                Direction::Right => Line { x0: last, y0: i, dx: -1, dy: 0 },
                Direction::Down => Line { x0: i, y0: last, dx: 0, dy: -1 },
                Direction::Left => Line { x0: 0, y0: i, dx: 1, dy: 0 },
            };
        }
        lines
    }
}

/// Outcome of compacting a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutcome {
    pub statics: ArrayVec<StaticEvent, { GRID_SIZE as usize }>,
    pub moves: ArrayVec<MoveEvent, { GRID_SIZE as usize }>,
    pub merges: ArrayVec<MergeEvent, { GRID_SIZE as usize / 2 }>,
}

/// Compact one line of `grid` towards slot 0.
///
/// Only the two tiles nearest the target edge of an equal run merge; a run
/// of three yields one merge and one leftover tile.
pub fn compact_line(grid: &Grid, line: Line) -> LineOutcome {
    let mut tiles: ArrayVec<(u8, u8, u8), { GRID_SIZE as usize }> = ArrayVec::new();
    for k in 0..GRID_SIZE {
        let (x, y) = line.slot(k);
        let value = grid.at(x, y);
        if value != 0 {
            tiles.push((x, y, value));
        }
    }

    let mut out = LineOutcome::default();
    let mut i = 0;
    let mut k = 0u8;
    while i < tiles.len() {
        let (sx, sy, value0) = tiles[i];
        let (x, y) = line.slot(k);

        match tiles.get(i + 1) {
            Some(&(x1, y1, next)) if next == value0 => {
                debug_assert!(value0 < MAX_EXPONENT, "merge would overflow exponent");
                out.merges.push(MergeEvent {
                    x0: sx,
                    y0: sy,
                    x1,
                    y1,
                    x,
                    y,
                    value0,
                    value: value0 + 1,
                });
                i += 2;
            }
            _ => {
                if (x, y) == (sx, sy) {
                    out.statics.push(StaticEvent { x, y, value: value0 });
                } else {
                    out.moves.push(MoveEvent {
                        x0: sx,
                        y0: sy,
                        x,
                        y,
                        value: value0,
                    });
                }
                i += 1;
            }
        }
        k += 1;
    }
    out
}

/// Tile-by-tile decomposition of a whole-grid slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    pub statics: ArrayVec<StaticEvent, CELL_COUNT>,
    pub moves: ArrayVec<MoveEvent, CELL_COUNT>,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES>,
}

impl Slide {
    /// Resolve a slide of `grid` in `direction` without touching the grid.
    pub fn resolve(grid: &Grid, direction: Direction) -> Self {
        let mut slide = Slide::default();
        for line in Line::sweep(direction) {
            let outcome = compact_line(grid, line);
            slide.statics.extend(outcome.statics);
            slide.moves.extend(outcome.moves);
            slide.merges.extend(outcome.merges);
        }
        slide
    }

    /// A slide that neither moves nor merges anything changes nothing.
    pub fn is_noop(&self) -> bool {
        self.moves.is_empty() && self.merges.is_empty()
    }

    /// Points earned by this slide's merges.
    pub fn points(&self) -> u32 {
        score_difference(&self.merges).unwrap_or(0)
    }

    /// Clear `grid` and rewrite it from every destination of this slide.
    pub fn apply(&self, grid: &mut Grid) {
        grid.clear();
        for s in &self.statics {
            Self::place(grid, s.x, s.y, s.value);
        }
        for m in &self.moves {
            Self::place(grid, m.x, m.y, m.value);
        }
        for m in &self.merges {
            Self::place(grid, m.x, m.y, m.value);
        }
    }

    #[inline(always)]
    fn place(grid: &mut Grid, x: u8, y: u8, value: u8) {
        debug_assert!(grid.is_empty_at(x, y), "destination ({x}, {y}) written twice");
        grid.set(x, y, value);
    }
}
