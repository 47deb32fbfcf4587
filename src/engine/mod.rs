//! Engine module: the 4x4 grid, the slide/merge transform, and tile spawning.
//!
//! - `Grid` is the row-major board value with a few helpers.
//! - `Direction` selects the axis and travel sign of a move.
//! - Free functions (`shift`, `spawn_tile`, ...) operate on a `Grid` directly;
//!   [`crate::Game`] wraps them around an owned grid and RNG.

mod grid;
mod ops;
mod spawn;

pub use grid::{Direction, Grid, SIZE};
pub use ops::shift;
pub use spawn::{generate_random_tile, place_tile, spawn_tile};
