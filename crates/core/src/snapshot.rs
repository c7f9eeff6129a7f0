use serde::{Deserialize, Serialize};

use crate::types::GRID_SIZE;

/// Plain copy of everything a front end shows between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Exponents, `rows[y][x]`
    pub rows: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub score: u32,
    pub game_over: bool,
    /// Largest displayed value on the grid
    pub max_tile: u32,
    pub empty_count: u8,
}

impl GameSnapshot {
    /// Exponent at (x, y); out-of-range coordinates read as empty.
    pub fn at(&self, x: u8, y: u8) -> u8 {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_at_bounds() {
        let mut snap = GameSnapshot::default();
        snap.rows[2][1] = 7;
        assert_eq!(snap.at(1, 2), 7);
        assert_eq!(snap.at(9, 9), 0);
    }
}
