//! Grid module - the 4x4 playfield
//!
//! Each cell stores an exponent (`0` = empty). Storage is a flat array in
//! row-major order, so `(x, y)` lives at `y * 4 + x`.

use arrayvec::ArrayVec;

use crate::types::{displayed_value, CELL_COUNT, GRID_SIZE, MAX_EXPONENT};

/// The playfield - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of exponents, row-major order (y * SIZE + x)
    cells: [u8; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from rows (`rows[y][x]`).
    ///
    /// Panics if any value exceeds [`MAX_EXPONENT`].
    pub fn from_rows(rows: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                grid.set(x as u8, y as u8, value);
            }
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }
        Some((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    /// Get the exponent at (x, y), `None` if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Exponent at an in-bounds position.
    ///
    /// Panics when (x, y) lies outside the grid.
    #[inline(always)]
    pub fn at(&self, x: u8, y: u8) -> u8 {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!("cell ({x}, {y}) is outside the grid"),
        }
    }

    /// Set the exponent at (x, y).
    ///
    /// Out-of-bounds coordinates and values above [`MAX_EXPONENT`] are
    /// programming errors and panic.
    pub fn set(&mut self, x: u8, y: u8, value: u8) {
        assert!(
            value <= MAX_EXPONENT,
            "exponent {value} exceeds maximum {MAX_EXPONENT}"
        );
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = value,
            None => panic!("cell ({x}, {y}) is outside the grid"),
        }
    }

    pub fn is_empty_at(&self, x: u8, y: u8) -> bool {
        self.get(x, y) == Some(0)
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Coordinates of every empty cell, row by row.
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                out.push(((idx % GRID_SIZE as usize) as u8, (idx / GRID_SIZE as usize) as u8));
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest exponent on the grid (`0` when empty)
    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Largest displayed value on the grid
    pub fn max_tile(&self) -> u32 {
        displayed_value(self.max_exponent())
    }

    /// Whether any two orthogonally adjacent cells hold the same non-zero value.
    pub fn has_adjacent_pair(&self) -> bool {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let value = self.at(x, y);
                if value == 0 {
                    continue;
                }
                if x + 1 < GRID_SIZE && self.at(x + 1, y) == value {
                    return true;
                }
                if y + 1 < GRID_SIZE && self.at(x, y + 1) == value {
                    return true;
                }
            }
        }
        false
    }

    /// Terminal state: no empty cell and no adjacent equal pair.
    ///
    /// Short-circuits on the first empty cell, then on the first pair.
    pub fn is_terminal(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        !self.has_adjacent_pair()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Convert to rows (`rows[y][x]`)
    pub fn rows(&self) -> [[u8; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut rows = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (y, row) in rows.iter_mut().enumerate() {
            let start = y * GRID_SIZE as usize;
            row.copy_from_slice(&self.cells[start..start + GRID_SIZE as usize]);
        }
        rows
    }
}
