//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data exchanged between the rule engine and
//! whatever drives it (terminal front end, tests, benchmarks). Nothing here
//! owns state or performs I/O.
//!
//! # Grid
//!
//! The playfield is a 4x4 grid of *exponents*:
//!
//! - `0` means the cell is empty
//! - a cell holding `v` displays the magnitude `2^v` (so `1` shows "2", `2` shows "4")
//! - coordinates are `(x, y)` with `x` growing to the right and `y` growing downwards
//!
//! # Events
//!
//! Every accepted move (and every reset) produces a [`GameEvents`] batch that
//! describes exactly what happened to each tile. A presentation layer can
//! animate from it without diffing grids:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `statics` | tiles that stayed where they were |
//! | `spawns` | tiles created this turn |
//! | `moves` | tiles that slid without merging |
//! | `merges` | two equal tiles combined into one |
//! | `score` | running total plus the delta of this turn |
//! | `game_over` | no direction can change the grid any more |
//!
//! # Examples
//!
//! ```
//! use dmqh_types::{displayed_value, Direction, GameEvents};
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert_eq!(displayed_value(11), 2048);
//!
//! let events = GameEvents::default();
//! assert_eq!(events.tile_count(), 0);
//! ```

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Grid side length in cells.
pub const GRID_SIZE: u8 = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Largest exponent a cell may hold; `2^31` still fits a `u32`.
pub const MAX_EXPONENT: u8 = 31;

/// Probability that a spawned tile is a "4" (exponent 2) rather than a "2".
pub const FOUR_PROBABILITY: f64 = 0.05;

/// Number of tiles placed by a reset.
pub const INITIAL_SPAWNS: usize = 2;

/// Upper bound on merges in one move (two per line).
pub const MAX_MERGES: usize = CELL_COUNT / 2;

/// Magnitude shown for a cell exponent (`0` stays `0`).
pub fn displayed_value(exponent: u8) -> u32 {
    if exponent == 0 {
        0
    } else {
        1u32 << exponent
    }
}

/// Slide direction
///
/// Tiles travel towards the edge the direction names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Commands a front end can issue to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile towards one edge
    Slide(Direction),
    /// Throw the current game away and start over
    Restart,
}

/// A tile that appeared this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub x: u8,
    pub y: u8,
    pub value: u8,
}

/// A tile that did not move this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticEvent {
    pub x: u8,
    pub y: u8,
    pub value: u8,
}

/// A tile that slid from `(x0, y0)` to `(x, y)` without merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvent {
    pub x0: u8,
    pub y0: u8,
    pub x: u8,
    pub y: u8,
    pub value: u8,
}

/// Two tiles of exponent `value0` from `(x0, y0)` and `(x1, y1)` combined
/// into one tile of exponent `value` at `(x, y)`.
///
/// `(x0, y0)` is the source nearer the target edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeEvent {
    pub x0: u8,
    pub y0: u8,
    pub x1: u8,
    pub y1: u8,
    pub x: u8,
    pub y: u8,
    pub value0: u8,
    pub value: u8,
}

/// Score after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub score: u32,
    /// Points gained this turn; `None` after a reset or a move without merges.
    pub difference: Option<u32>,
}

/// Everything that changed during one reset or accepted move.
///
/// Capacities are fixed so building a batch never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvents {
    pub statics: ArrayVec<StaticEvent, CELL_COUNT>,
    pub spawns: ArrayVec<SpawnEvent, INITIAL_SPAWNS>,
    pub moves: ArrayVec<MoveEvent, CELL_COUNT>,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES>,
    pub score: ScoreEvent,
    pub game_over: bool,
}

impl GameEvents {
    /// Number of tiles on the grid once this batch has been applied.
    pub fn tile_count(&self) -> usize {
        self.statics.len() + self.moves.len() + self.merges.len() + self.spawns.len()
    }
}
