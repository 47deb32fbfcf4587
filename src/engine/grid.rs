use std::fmt;

use serde::{Deserialize, Serialize};

/// Cells per side.
pub const SIZE: usize = 4;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in `[Up, Down, Left, Right]` order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// True when tiles travel along a column (Up/Down).
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True when tiles travel toward index 0 of their line (Up/Left).
    #[inline]
    pub fn toward_origin(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Row-major 4x4 grid. A cell holds 0 (empty) or the tile's displayed value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid(pub(crate) [[u32; SIZE]; SIZE]);

impl Grid {
    /// A constant empty grid (all zeros).
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Build a grid from explicit rows. Values are taken as-is.
    #[inline]
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Self {
        Grid(rows)
    }

    /// Borrow the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.0
    }

    /// Consume the grid, returning its rows.
    #[inline]
    pub fn into_rows(self) -> [[u32; SIZE]; SIZE] {
        self.0
    }

    /// Value at (`row`, `col`); 0 if empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.0[row][col] = value;
    }

    /// Reset every cell to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = [[0; SIZE]; SIZE];
    }

    /// Iterate cell values in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    /// Count the number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&v| v == 0).count()
    }

    /// Count the number of tiles (non-empty cells).
    pub fn count_tiles(&self) -> usize {
        SIZE * SIZE - self.count_empty()
    }

    /// Highest tile value present, or 0 on an empty grid.
    pub fn highest_tile(&self) -> u32 {
        self.cells().max().unwrap_or(0)
    }

    /// True if every cell is 0 or a power of two.
    pub fn is_well_formed(&self) -> bool {
        self.cells().all(|v| v == 0 || v.is_power_of_two())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SIZE * 8 - 1);
        for (idx, row) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f, "{separator}")?;
            }
            let cells: Vec<String> = row.iter().map(|&v| format_val(v)).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl From<[[u32; SIZE]; SIZE]> for Grid {
    fn from(rows: [[u32; SIZE]; SIZE]) -> Self {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for [[u32; SIZE]; SIZE] {
    fn from(grid: Grid) -> Self {
        grid.into_rows()
    }
}

fn format_val(val: u32) -> String {
    match val {
        0 => " ".repeat(7),
        x => format!("{x:^7}"),
    }
}
