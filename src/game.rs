use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::{self, Direction, Grid};

/// A single game session: owns the grid and the random source used for spawns.
///
/// The engine never spawns on its own after [`Game::move_tiles`]; callers
/// either follow a successful move with [`Game::spawn_tile`] or use
/// [`Game::apply`], which does both.
///
/// ```
/// use tile_2048::{Direction, Game};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut game = Game::with_rng(StdRng::seed_from_u64(42));
/// let start = game.initialize();
/// assert_eq!(start.count_tiles(), 2);
/// if game.move_tiles(Direction::Left) {
///     game.spawn_tile();
/// }
/// assert!(game.grid().is_well_formed());
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    rng: R,
}

impl Game<StdRng> {
    /// A game seeded from OS entropy. Call [`Game::initialize`] before playing.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A game with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// A game drawing spawns from `rng`. The grid starts empty.
    pub fn with_rng(rng: R) -> Self {
        Game { grid: Grid::EMPTY, rng }
    }

    /// Clear the grid and place two random tiles. Returns the starting grid.
    pub fn initialize(&mut self) -> Grid {
        self.grid.clear();
        self.spawn_tile();
        self.spawn_tile();
        debug!("initialized grid with {} tiles", self.grid.count_tiles());
        self.grid
    }

    /// Slide/merge toward `direction`. Returns true if any cell changed.
    ///
    /// A false return leaves the grid untouched.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let moved = engine::shift(&mut self.grid, direction);
        trace!("move {direction}: moved={moved}");
        moved
    }

    /// Place a 2 (90%) or 4 (10%) in a random empty cell; no-op when full.
    pub fn spawn_tile(&mut self) {
        match engine::spawn_tile(&mut self.grid, &mut self.rng) {
            Some((row, col, value)) => trace!("spawned {value} at ({row}, {col})"),
            None => trace!("spawn skipped: grid full"),
        }
    }

    /// One input transaction: move toward `direction`, then spawn if it moved.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let moved = self.move_tiles(direction);
        if moved {
            self.spawn_tile();
        }
        moved
    }

    /// Borrow the current grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the current grid for rendering.
    #[inline]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Replace the grid, e.g. to start from a prepared position.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}
