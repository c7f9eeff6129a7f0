//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the rule engine of a 4x4 sliding tile merge puzzle. It has
//! **no dependencies** on terminals, rendering or timing, making it:
//!
//! - **Deterministic**: the only randomness goes through [`SpawnRng`]; the same
//!   seed replays the same game
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Allocation-free**: a turn works on fixed arrays and `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 exponent grid with terminal-state detection
//! - [`slide`]: line compaction and the tile-by-tile decomposition of a slide
//! - [`scoring`]: points for merges
//! - [`rng`]: spawn randomness (seeded LCG, `rand`, scripted)
//! - [`game`]: the engine tying it all together
//! - [`snapshot`]: copyable view of the observable state
//!
//! # Game Rules
//!
//! - A slide moves every tile as far as it goes towards one edge
//! - Two adjacent equal tiles merge once per slide into the next exponent;
//!   the pair nearest the target edge wins
//! - A merge of two `2^v` tiles scores `2^v` points
//! - Every effective slide spawns one tile: a "4" with probability 0.05,
//!   otherwise a "2", on a uniformly chosen empty cell
//! - A slide that changes nothing is ignored
//! - The game is over when the grid is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use dmqh_core::Game;
//! use dmqh_types::Direction;
//!
//! let mut game = Game::with_seed(12345);
//! let opening = game.reset();
//! assert_eq!(opening.spawns.len(), 2);
//!
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     if let Some(events) = game.play(direction) {
//!         assert_eq!(events.spawns.len(), 1);
//!         assert_eq!(events.score.score, game.score());
//!     }
//! }
//! ```

pub mod game;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod slide;
pub mod snapshot;

pub use dmqh_types as types;

// Re-export commonly used types for convenience
pub use game::Game;
pub use grid::Grid;
pub use rng::{ScriptedRng, SimpleRng, SpawnRng};
pub use scoring::{merge_points, score_difference};
pub use slide::{compact_line, Line, LineOutcome, Slide};
pub use snapshot::GameSnapshot;
