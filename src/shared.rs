//! Lock-protected engine for UI layers that deliver input and render
//! callbacks on different threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::Rng;

use crate::engine::{Direction, Grid};
use crate::game::Game;

/// A [`Game`] behind a single mutex.
///
/// [`SharedGame::apply`] holds the lock for the whole move+spawn transaction;
/// [`SharedGame::snapshot`] copies the grid out and releases the lock before
/// returning, so renderers never hold it.
#[derive(Debug)]
pub struct SharedGame<R = StdRng> {
    inner: Mutex<Game<R>>,
}

impl<R: Rng> SharedGame<R> {
    pub fn new(game: Game<R>) -> Self {
        SharedGame { inner: Mutex::new(game) }
    }

    /// Re-seed the grid with two tiles and return it.
    pub fn initialize(&self) -> Grid {
        self.lock().initialize()
    }

    /// Move toward `direction` and spawn if anything moved, atomically.
    pub fn apply(&self, direction: Direction) -> bool {
        self.lock().apply(direction)
    }

    /// Copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.lock().snapshot()
    }

    pub fn into_inner(self) -> Game<R> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Every statement leaves the grid well-formed, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Rng> From<Game<R>> for SharedGame<R> {
    fn from(game: Game<R>) -> Self {
        SharedGame::new(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_moves_keep_grid_well_formed() {
        let shared = SharedGame::new(Game::seeded(8));
        shared.initialize();
        thread::scope(|s| {
            for dir in Direction::ALL {
                let shared = &shared;
                s.spawn(move || {
                    for _ in 0..200 {
                        shared.apply(dir);
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..200 {
                    let grid = shared.snapshot();
                    assert!(grid.is_well_formed());
                    assert!(grid.count_tiles() >= 1);
                }
            });
        });
        let game = shared.into_inner();
        assert!(game.grid().is_well_formed());
    }

    #[test]
    fn snapshot_reflects_applied_move() {
        let mut game = Game::seeded(1);
        game.set_grid(Grid::from_rows([[0, 0, 2, 2], [0; 4], [0; 4], [0; 4]]));
        let shared = SharedGame::from(game);
        assert!(shared.apply(Direction::Left));
        let grid = shared.snapshot();
        assert_eq!(grid.get(0, 0), 4);
        assert_eq!(grid.count_tiles(), 2);
    }
}
