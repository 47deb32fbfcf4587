use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use tile_2048::config::Config;
use tile_2048::Game;

#[derive(Debug, Parser)]
#[command(name = "tile-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// Optional TOML config (seed, extra key bindings)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match &args.config {
        Some(path) => Config::from_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    let keys = config.key_map();
    let mut game = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("using seed {seed}");
            Game::seeded(seed)
        }
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", game.initialize())?;
    writeln!(out, "Arrows, WASD or hjkl then Enter to move; q to quit.")?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        if matches!(line.trim(), "q" | "quit") {
            break;
        }
        for dir in keys.directions(&line) {
            if game.apply(dir) {
                writeln!(out, "{}", game.grid())?;
            } else {
                debug!("{dir} rejected");
            }
        }
        out.flush()?;
    }
    Ok(())
}
