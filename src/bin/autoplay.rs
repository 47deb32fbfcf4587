use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;
use tile_2048::{Direction, Game};

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Drive a 2048 board with random directions")]
struct Args {
    /// RNG seed for both the spawns and the chosen directions
    #[arg(long)]
    seed: Option<u64>,

    /// Number of directions to issue
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Only print the summary line
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Default)]
struct Tally {
    accepted: u64,
    rejected: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("autoplay seed {seed}, {} steps", args.steps);
    let mut picker = StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut game = Game::seeded(seed);
    game.initialize();

    let start = Instant::now();
    let mut tally = Tally::default();
    for _ in 0..args.steps {
        let dir = *Direction::ALL.choose(&mut picker).unwrap_or(&Direction::Left);
        if game.apply(dir) {
            tally.accepted += 1;
        } else {
            tally.rejected += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64().max(1e-9);

    let grid = game.snapshot();
    if !args.quiet {
        println!("{grid}");
    }
    println!(
        "Accepted: {} | Rejected: {} | Highest tile: {} | moves/sec: {:.1}",
        tally.accepted,
        tally.rejected,
        grid.highest_tile(),
        (tally.accepted + tally.rejected) as f64 / elapsed
    );
    Ok(())
}
