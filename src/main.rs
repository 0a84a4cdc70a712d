//! Fogline - headless arena runner
//!
//! Builds an arena from config, lets the agents fight it out for a fixed
//! number of turns, and reports what is left standing.

use std::path::PathBuf;

use clap::Parser;

use fogline::core::config::ArenaConfig;
use fogline::core::error::Result;
use fogline::sim::Arena;

#[derive(Parser, Debug)]
#[command(name = "fogline", about = "Headless fog-of-war combat arena")]
struct Cli {
    /// Path to a TOML arena config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of turns to simulate
    #[arg(long)]
    turns: Option<u64>,

    /// Override the world seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the end-of-run summary to this path as JSON
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fogline=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(turns) = cli.turns {
        config.turns = turns;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    tracing::info!(
        width = config.width,
        height = config.height,
        turns = config.turns,
        seed = config.seed,
        "arena starting"
    );

    let mut arena = Arena::from_config(&config);
    for _ in 0..config.turns {
        arena.run_turn();
        if arena.turn() % 100 == 0 {
            let progress = arena.summary();
            tracing::info!(
                turn = progress.turn,
                red = progress.red_units,
                blue = progress.blue_units,
                hazards = progress.hazard_units,
                "progress"
            );
        }
    }

    let summary = arena.summary();
    tracing::info!(
        red = summary.red_units,
        blue = summary.blue_units,
        hazards = summary.hazard_units,
        red_parts = summary.red_parts,
        blue_parts = summary.blue_parts,
        "run complete"
    );

    if let Some(path) = &cli.summary {
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        tracing::info!(path = %path.display(), "summary written");
    }

    Ok(())
}
