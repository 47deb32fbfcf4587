use rand::Rng;

use super::grid::{Grid, SIZE};

/// Insert a random 2 (90%) or 4 (10%) tile into a uniformly chosen empty cell.
///
/// No-op on a full grid. Returns the `(row, col, value)` written, if any.
///
/// ```
/// use tile_2048::engine::{self, Grid};
/// use rand::{SeedableRng, rngs::StdRng};
/// let mut rng = StdRng::seed_from_u64(123);
/// let mut grid = Grid::EMPTY;
/// engine::spawn_tile(&mut grid, &mut rng);
/// assert_eq!(grid.count_empty(), 15);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(usize, usize, u32)> {
    let empty = grid.count_empty();
    if empty == 0 {
        return None;
    }
    let nth = rng.gen_range(1..=empty);
    let value = generate_random_tile(rng);
    place_tile(grid, nth, value)
}

/// Write `value` into the `nth` (1-based) empty cell in row-major order.
///
/// Returns the coordinates written, or `None` if the grid has fewer than
/// `nth` empty cells.
pub fn place_tile(grid: &mut Grid, nth: usize, value: u32) -> Option<(usize, usize, u32)> {
    let mut count = 0;
    for row in 0..SIZE {
        for col in 0..SIZE {
            if grid.get(row, col) == 0 {
                count += 1;
                if count == nth {
                    grid.set(row, col, value);
                    return Some((row, col, value));
                }
            }
        }
    }
    None
}

/// 2 with probability 0.9, otherwise 4.
pub fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(0.9) {
        2
    } else {
        4
    }
}
