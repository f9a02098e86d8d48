//! Simulate many games of War and report timing statistics.
//!
//! Usage: cargo run --release --bin war-sim -- --games 1000 --jokers --seed 7
//!
//! Writes `war_results_*.csv` (one row per game) and prints a summary.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use war_sim::cards::deck_size;
use war_sim::simulation::{results_file_name, write_results, BatchSummary, Simulation};
use war_sim::SimulationConfig;

#[derive(Parser, Debug)]
#[command(name = "war-sim")]
#[command(about = "Simulate games of War with a hand/shuffle time model")]
struct Args {
    /// Time to play a hand (ms)
    #[arg(long, default_value_t = 500, allow_negative_numbers = true)]
    hand: i64,

    /// Time to shuffle (ms)
    #[arg(long, default_value_t = 15_000, allow_negative_numbers = true)]
    shuffle: i64,

    /// Include two jokers in the deck
    #[arg(long)]
    jokers: bool,

    /// Random seed (0 for current time)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Maximum simulated game time (ms)
    #[arg(long, default_value_t = 3_600_000, allow_negative_numbers = true)]
    maxtime: i64,

    /// Directory for the results file
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("war-sim failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let seed = if args.seed != 0 { args.seed } else { clock_seed()? };
    let config = SimulationConfig::new()
        .with_hand_time(args.hand)
        .with_shuffle_time(args.shuffle)
        .with_jokers(args.jokers)
        .with_seed(seed)
        .with_games(args.games)
        .with_max_game_time(args.maxtime);

    let simulation = Simulation::new(config).context("invalid configuration")?;

    println!("Deck size: {}", deck_size(args.jokers));
    println!("Starting simulation of {} games...", args.games);
    let started = Instant::now();
    let records = simulation.run();
    println!("Simulation completed in {:?}", started.elapsed());

    // File name uses the seed as given (0 for clock-seeded runs).
    let file_config = SimulationConfig {
        seed: args.seed,
        ..simulation.config().clone()
    };
    let path = args.output.join(results_file_name(&file_config));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    write_results(BufWriter::new(file), &records)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("results written to {}", path.display());

    print!("{}", BatchSummary::from_records(&records));
    Ok(())
}

fn clock_seed() -> Result<u64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?;
    Ok(now.as_nanos() as u64)
}
