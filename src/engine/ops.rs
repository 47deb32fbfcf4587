use super::grid::{Direction, Grid, SIZE};

/// Slide/merge tiles in the given direction, in place. No randomness.
///
/// Each line (row for Left/Right, column for Up/Down) is processed in one
/// forward pass. Returns true if any cell changed value or position.
pub fn shift(grid: &mut Grid, direction: Direction) -> bool {
    let mut moved = false;
    for line in 0..SIZE {
        moved |= shift_line(grid, direction, line);
    }
    moved
}

/// Coordinates of the cell `dist` steps away from the wall `direction` pushes toward.
#[inline(always)]
fn cell_at(direction: Direction, line: usize, dist: usize) -> (usize, usize) {
    let pos = if direction.toward_origin() { dist } else { SIZE - 1 - dist };
    if direction.is_vertical() {
        (pos, line)
    } else {
        (line, pos)
    }
}

fn shift_line(grid: &mut Grid, direction: Direction, line: usize) -> bool {
    let at = |dist: usize| cell_at(direction, line, dist);
    let mut moved = false;
    // The cell against the wall never travels; scan away from it.
    for dist in 1..SIZE {
        let (row, col) = at(dist);
        let value = grid.get(row, col);
        if value == 0 {
            continue;
        }
        let mut k = dist;
        while k > 0 {
            let (next_row, next_col) = at(k - 1);
            if grid.get(next_row, next_col) != 0 {
                break;
            }
            let (cur_row, cur_col) = at(k);
            grid.set(next_row, next_col, value);
            grid.set(cur_row, cur_col, 0);
            k -= 1;
            moved = true;
        }
        if k > 0 {
            let (next_row, next_col) = at(k - 1);
            if grid.get(next_row, next_col) == value {
                let (cur_row, cur_col) = at(k);
                grid.set(next_row, next_col, value * 2);
                grid.set(cur_row, cur_col, 0);
                moved = true;
            }
        }
    }
    moved
}
