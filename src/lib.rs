//! tile-2048: a 2048 board engine
//!
//! This crate provides:
//! - A row-major `Grid` value and an in-place slide/merge transform (`engine` module)
//! - A `Game` session owning the grid and an injected RNG
//! - A mutex-wrapped `SharedGame` for multi-threaded UI callbacks
//! - Key mapping (`input`) and TOML front-end configuration (`config`)
//!
//! Quick start:
//! ```
//! use tile_2048::{Direction, Game};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic session with a seeded RNG
//! let mut game = Game::with_rng(StdRng::seed_from_u64(42));
//! let start = game.initialize();
//! assert_eq!(start.count_tiles(), 2);
//!
//! // One key press: slide/merge, then spawn if anything moved
//! let moved = game.apply(Direction::Left);
//! assert!(moved || game.snapshot() == start);
//! println!("{}", game.grid());
//! ```
//!
//! Note: the engine has no notion of score or game over. A board with no
//! legal moves simply rejects every direction.
//!
pub mod config;
pub mod engine;
pub mod game;
pub mod input;
pub mod shared;

pub use engine::{Direction, Grid, SIZE};
pub use game::Game;
pub use shared::SharedGame;
