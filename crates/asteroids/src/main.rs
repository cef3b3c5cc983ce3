//! Asteroids game binary
//!
//! Runs the game headless: the frame list goes to the log instead of a
//! window, and input comes from the autopilot when `--autopilot` is given.

use arcade_engine::foundation::logging;
use asteroids::{config::GameConfig, runner};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asteroids")]
#[command(about = "Run the Asteroids simulation headless")]
struct Cli {
    /// Config file (TOML or RON); defaults are used when it does not exist
    #[arg(long, default_value = "asteroids.toml")]
    config: PathBuf,

    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// RNG seed, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Fly the ship with a scripted pattern
    #[arg(long)]
    autopilot: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_filter("info");
    let cli = Cli::parse();

    log::info!("Starting Asteroids");

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.gameplay.seed = Some(seed);
    }

    let summary = runner::run(config, cli.frames, cli.autopilot)?;

    println!();
    println!("=== GAME SUMMARY ===");
    println!("  Frames:     {}", summary.frame);
    println!("  Time:       {:.1}s", summary.time);
    println!("  Score:      {}", summary.score);
    println!("  Lives:      {}", summary.lives);
    println!("  Phase:      {:?}", summary.phase);
    println!("  Asteroids:  {}", summary.asteroids);

    Ok(())
}
