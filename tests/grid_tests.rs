//! Grid tests - terminal-state detection and cell bookkeeping

use dmqh::core::Grid;

/// Full checkerboard of two values: no equal neighbours anywhere.
fn locked_grid() -> Grid {
    Grid::from_rows([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]])
}

#[test]
fn test_locked_grid_is_terminal() {
    let grid = locked_grid();
    assert!(grid.is_full());
    assert!(!grid.has_adjacent_pair());
    assert!(grid.is_terminal());
}

#[test]
fn test_any_empty_cell_is_not_terminal() {
    for y in 0..4 {
        for x in 0..4 {
            let mut grid = locked_grid();
            grid.set(x, y, 0);
            assert!(!grid.is_terminal(), "empty cell at ({x}, {y})");
        }
    }
}

#[test]
fn test_any_horizontal_pair_is_not_terminal() {
    for y in 0..4u8 {
        for x in 0..3u8 {
            let mut grid = locked_grid();
            let value = grid.at(x, y);
            grid.set(x + 1, y, value);
            assert!(grid.is_full());
            assert!(!grid.is_terminal(), "pair at ({x}, {y})-({}, {y})", x + 1);
        }
    }
}

#[test]
fn test_any_vertical_pair_is_not_terminal() {
    for y in 0..3u8 {
        for x in 0..4u8 {
            let mut grid = locked_grid();
            let value = grid.at(x, y);
            grid.set(x, y + 1, value);
            assert!(grid.is_full());
            assert!(!grid.is_terminal(), "pair at ({x}, {y})-({x}, {})", y + 1);
        }
    }
}

#[test]
fn test_distinct_values_full_grid_is_terminal() {
    let grid = Grid::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);
    assert!(grid.is_terminal());
}

#[test]
fn test_empty_grid_is_not_terminal() {
    assert!(!Grid::new().is_terminal());
    assert_eq!(Grid::new().empty_cells().len(), 16);
}

#[test]
fn test_clear() {
    let mut grid = locked_grid();
    grid.clear();
    assert_eq!(grid, Grid::new());
}
