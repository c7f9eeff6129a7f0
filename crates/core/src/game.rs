//! Game module - the grid engine
//!
//! [`Game`] owns the grid, the running score and the spawn RNG. It has two
//! state-changing entry points:
//!
//! - [`Game::reset`]: clear everything and spawn two tiles
//! - [`Game::play`]: slide in one direction, score merges, spawn one tile
//!
//! Both return a [`GameEvents`] batch describing the turn; an ineffective
//! slide returns `None` and leaves the game untouched.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::grid::Grid;
use crate::rng::{SimpleRng, SpawnRng};
use crate::scoring::score_difference;
use crate::slide::Slide;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameAction, GameEvents, ScoreEvent, SpawnEvent, FOUR_PROBABILITY, INITIAL_SPAWNS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    grid: Grid,
    score: u32,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a new game driven by the deterministic LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: SpawnRng> Game<R> {
    /// Create a new game with an empty grid.
    ///
    /// Nothing is spawned until [`Game::reset`] is called.
    pub fn new(rng: R) -> Self {
        Self::from_parts(Grid::new(), 0, rng)
    }

    /// Resume from an existing position.
    pub fn from_parts(grid: Grid, score: u32, rng: R) -> Self {
        Self { grid, score, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// No direction can change the grid any more
    pub fn is_game_over(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Clear the grid and score, then spawn the opening tiles.
    pub fn reset(&mut self) -> GameEvents {
        self.grid.clear();
        self.score = 0;

        let mut events = GameEvents::default();
        for _ in 0..INITIAL_SPAWNS {
            events.spawns.push(self.spawn());
        }
        events.score = ScoreEvent {
            score: 0,
            difference: None,
        };
        events.game_over = false;

        debug!("new game, spawns {:?}", events.spawns.as_slice());
        events
    }

    /// Slide every tile towards `direction`.
    ///
    /// Returns `None` when the slide moves and merges nothing; grid, score and
    /// RNG are then left exactly as they were.
    pub fn play(&mut self, direction: Direction) -> Option<GameEvents> {
        let slide = Slide::resolve(&self.grid, direction);
        if slide.is_noop() {
            trace!("slide {} changes nothing", direction.as_str());
            return None;
        }

        slide.apply(&mut self.grid);

        let difference = score_difference(&slide.merges);
        self.score = self.score.saturating_add(difference.unwrap_or(0));

        let mut events = GameEvents {
            statics: slide.statics,
            moves: slide.moves,
            merges: slide.merges,
            ..GameEvents::default()
        };
        events.spawns.push(self.spawn());
        events.score = ScoreEvent {
            score: self.score,
            difference,
        };
        events.game_over = self.grid.is_terminal();

        debug!(
            "slide {}: moves={} merges={} delta={:?} score={} game_over={}",
            direction.as_str(),
            events.moves.len(),
            events.merges.len(),
            difference,
            self.score,
            events.game_over
        );
        Some(events)
    }

    /// Apply a front-end command.
    pub fn apply_action(&mut self, action: GameAction) -> Option<GameEvents> {
        match action {
            GameAction::Slide(direction) => self.play(direction),
            GameAction::Restart => Some(self.reset()),
        }
    }

    /// What a slide would do, without changing anything.
    pub fn slide_preview(&self, direction: Direction) -> Slide {
        Slide::resolve(&self.grid, direction)
    }

    /// Whether sliding towards `direction` would change the grid
    pub fn can_slide(&self, direction: Direction) -> bool {
        !self.slide_preview(direction).is_noop()
    }

    /// Every direction that would change the grid, in [`Direction::ALL`] order
    pub fn legal_directions(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_slide(direction))
            .collect()
    }

    /// Copy of the observable state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.score = self.score;
        out.game_over = self.grid.is_terminal();
        out.max_tile = self.grid.max_tile();
        out.empty_count = self.grid.empty_count() as u8;
    }

    /// Place one tile on a uniformly chosen empty cell.
    ///
    /// Panics when the grid is full: every spawn follows either a reset or a
    /// slide, and both leave at least one empty cell.
    fn spawn(&mut self) -> SpawnEvent {
        let empty = self.grid.empty_cells();
        assert!(!empty.is_empty(), "spawn attempted on a full grid");

        let value = if self.rng.chance(FOUR_PROBABILITY) { 2 } else { 1 };
        let (x, y) = empty[self.rng.next_index(empty.len())];
        self.grid.set(x, y, value);

        SpawnEvent { x, y, value }
    }
}

impl Default for Game<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
