use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tile_2048::engine::{self, Direction, Grid, SIZE};
use tile_2048::Game;

fn single_row(line: [u32; SIZE]) -> Grid {
    Grid::from_rows([line, [0; SIZE], [0; SIZE], [0; SIZE]])
}

#[test]
fn invariant_holds_over_random_sessions() {
    let mut picker = StdRng::seed_from_u64(31);
    for seed in 0..50 {
        let mut game = Game::seeded(seed);
        game.initialize();
        for _ in 0..300 {
            let dir = *Direction::ALL.choose(&mut picker).unwrap();
            let before = game.snapshot();
            if game.move_tiles(dir) {
                game.spawn_tile();
            } else {
                assert_eq!(game.snapshot(), before, "rejected move changed the grid");
            }
            assert!(game.grid().is_well_formed(), "{:?}", game.grid());
            assert_eq!(game.grid().rows().len(), SIZE);
        }
    }
}

#[test]
fn spawn_changes_exactly_one_empty_cell() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = Grid::from_rows([[2, 0, 4, 0], [0, 8, 0, 0], [16, 0, 0, 2], [0, 0, 0, 0]]);
    while grid.count_empty() > 0 {
        let before = grid;
        engine::spawn_tile(&mut grid, &mut rng);
        let changed: Vec<(u32, u32)> = before
            .cells()
            .zip(grid.cells())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(changed.len(), 1);
        let (old, new) = changed[0];
        assert_eq!(old, 0);
        assert!(new == 2 || new == 4);
    }
    let full = grid;
    engine::spawn_tile(&mut grid, &mut rng);
    assert_eq!(grid, full);
}

#[test]
fn three_in_a_row_merges_first_pair_only() {
    let mut grid = single_row([2, 2, 2, 0]);
    assert!(engine::shift(&mut grid, Direction::Left));
    assert_eq!(grid.rows()[0], [4, 2, 0, 0]);
}

#[test]
fn tiles_compact_against_the_wall() {
    let mut grid = single_row([0, 0, 2, 2]);
    assert!(engine::shift(&mut grid, Direction::Left));
    assert_eq!(grid.rows()[0], [4, 0, 0, 0]);
}

#[test]
fn repeated_move_is_a_noop() {
    let mut grid = single_row([2, 0, 0, 0]);
    assert!(engine::shift(&mut grid, Direction::Right));
    assert_eq!(grid.rows()[0], [0, 0, 0, 2]);
    let settled = grid;
    assert!(!engine::shift(&mut grid, Direction::Right));
    assert_eq!(grid, settled);
}

#[test]
fn columns_follow_the_same_rules() {
    let mut grid = Grid::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
    assert!(engine::shift(&mut grid, Direction::Up));
    assert_eq!(grid, Grid::from_rows([[4, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]]));

    let mut grid = Grid::from_rows([[0, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 2], [0, 0, 0, 2]]);
    assert!(engine::shift(&mut grid, Direction::Down));
    assert_eq!(grid, Grid::from_rows([[0; 4], [0; 4], [0, 0, 0, 2], [0, 0, 0, 4]]));
}

#[test]
fn initialize_spreads_tiles_uniformly() {
    let runs = 16_000;
    let mut rng = StdRng::seed_from_u64(2048);
    let mut hits = [[0u32; SIZE]; SIZE];
    let mut fours = 0u32;
    for _ in 0..runs {
        let mut game = Game::with_rng(&mut rng);
        let grid = game.initialize();
        assert_eq!(grid.count_tiles(), 2);
        for (row, cells) in grid.rows().iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                match value {
                    0 => {}
                    2 => hits[row][col] += 1,
                    4 => {
                        hits[row][col] += 1;
                        fours += 1;
                    }
                    other => panic!("unexpected starting tile {other}"),
                }
            }
        }
    }
    // Two tiles per run over 16 cells: 2000 expected per cell.
    let expected = f64::from(2 * runs) / (SIZE * SIZE) as f64;
    for row in hits {
        for count in row {
            let dev = (f64::from(count) - expected).abs() / expected;
            assert!(dev < 0.1, "cell count {count} vs expected {expected}");
        }
    }
    let four_ratio = f64::from(fours) / f64::from(2 * runs);
    assert!((0.085..0.115).contains(&four_ratio), "4-tile ratio {four_ratio:.4}");
}
