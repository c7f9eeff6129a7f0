//! Slide tests - compaction, merge ordering and the no-op rule

use dmqh::core::{Grid, Slide};
use dmqh::types::{Direction, MergeEvent, MoveEvent, StaticEvent};

fn transpose(rows: [[u8; 4]; 4]) -> [[u8; 4]; 4] {
    let mut out = [[0; 4]; 4];
    for (y, row) in rows.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            out[x][y] = v;
        }
    }
    out
}

fn mirror(rows: [[u8; 4]; 4]) -> [[u8; 4]; 4] {
    let mut out = rows;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

fn slid(rows: [[u8; 4]; 4], direction: Direction) -> [[u8; 4]; 4] {
    let mut grid = Grid::from_rows(rows);
    Slide::resolve(&grid, direction).apply(&mut grid);
    grid.rows()
}

#[test]
fn test_row_scenario_right() {
    let grid = Grid::from_rows([[1, 1, 2, 0], [0; 4], [0; 4], [0; 4]]);
    let slide = Slide::resolve(&grid, Direction::Right);

    assert_eq!(
        slide.merges.as_slice(),
        &[MergeEvent { x0: 1, y0: 0, x1: 0, y1: 0, x: 2, y: 0, value0: 1, value: 2 }]
    );
    assert_eq!(
        slide.moves.as_slice(),
        &[MoveEvent { x0: 2, y0: 0, x: 3, y: 0, value: 2 }]
    );
    assert!(slide.statics.is_empty());
    assert_eq!(slide.points(), 2);

    assert_eq!(slid(grid.rows(), Direction::Right)[0], [0, 0, 2, 2]);
}

#[test]
fn test_decomposition_is_reproducible() {
    let rows = [[1, 1, 2, 2], [0, 3, 3, 3], [4, 0, 4, 0], [5, 6, 7, 8]];
    let grid = Grid::from_rows(rows);
    for direction in Direction::ALL {
        let a = Slide::resolve(&grid, direction);
        let b = Slide::resolve(&grid, direction);
        assert_eq!(a, b);
    }
}

#[test]
fn test_three_equal_never_double_merge() {
    // every orientation of a run of three
    let cases = [
        ([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]], Direction::Left, [3, 2, 0, 0]),
        ([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]], Direction::Right, [0, 0, 2, 3]),
        ([[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Direction::Left, [3, 2, 0, 0]),
        ([[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Direction::Right, [0, 0, 2, 3]),
    ];
    for (rows, direction, expected) in cases {
        let grid = Grid::from_rows(rows);
        let slide = Slide::resolve(&grid, direction);
        assert_eq!(slide.merges.len(), 1, "{direction:?}");
        assert_eq!(slid(rows, direction)[0], expected, "{direction:?}");
    }
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    // [1,1,2,0] -> left gives [2,2,0,0], not [3,0,0,0]
    assert_eq!(slid([[1, 1, 2, 0], [0; 4], [0; 4], [0; 4]], Direction::Left)[0], [2, 2, 0, 0]);
    // [2,2,1,1] -> right merges both pairs independently
    assert_eq!(slid([[2, 2, 1, 1], [0; 4], [0; 4], [0; 4]], Direction::Right)[0], [0, 0, 3, 2]);
}

#[test]
fn test_vertical_matches_transposed_horizontal() {
    let rows = [[1, 0, 2, 2], [1, 3, 0, 2], [0, 3, 2, 4], [5, 0, 2, 4]];
    assert_eq!(
        slid(rows, Direction::Up),
        transpose(slid(transpose(rows), Direction::Left))
    );
    assert_eq!(
        slid(rows, Direction::Down),
        transpose(slid(transpose(rows), Direction::Right))
    );
}

#[test]
fn test_right_matches_mirrored_left() {
    let rows = [[1, 1, 1, 1], [2, 0, 2, 3], [0, 0, 0, 4], [4, 4, 0, 5]];
    assert_eq!(slid(rows, Direction::Right), mirror(slid(mirror(rows), Direction::Left)));
}

#[test]
fn test_destinations_form_dense_prefix() {
    let rows = [[0, 1, 0, 1], [2, 0, 3, 0], [0, 0, 0, 4], [4, 4, 4, 4]];
    for direction in Direction::ALL {
        let after = slid(rows, direction);
        // Normalise to "slide left" so every line must be packed to the front.
        let normalised = match direction {
            Direction::Left => after,
            Direction::Right => mirror(after),
            Direction::Up => transpose(after),
            Direction::Down => mirror(transpose(after)),
        };
        for line in normalised {
            let first_empty = line.iter().position(|&v| v == 0).unwrap_or(4);
            assert!(
                line[first_empty..].iter().all(|&v| v == 0),
                "{direction:?} left a gap: {line:?}"
            );
        }
    }
}

#[test]
fn test_every_tile_accounted_for_once() {
    let rows = [[1, 1, 0, 2], [3, 0, 3, 3], [0, 0, 0, 0], [1, 2, 3, 4]];
    let grid = Grid::from_rows(rows);
    for direction in Direction::ALL {
        let slide = Slide::resolve(&grid, direction);
        let sources = slide.statics.len() + slide.moves.len() + 2 * slide.merges.len();
        assert_eq!(sources, grid.tile_count(), "{direction:?}");
    }
}

#[test]
fn test_noop_when_fully_compacted() {
    let rows = [[1, 2, 3, 4], [2, 3, 0, 0], [5, 0, 0, 0], [0; 4]];
    let grid = Grid::from_rows(rows);
    let left = Slide::resolve(&grid, Direction::Left);
    assert!(left.is_noop());
    assert_eq!(
        left.statics.first(),
        Some(&StaticEvent { x: 0, y: 0, value: 1 })
    );
    let up = Slide::resolve(&grid, Direction::Up);
    assert!(up.is_noop());
    assert!(!Slide::resolve(&grid, Direction::Right).is_noop());
}
