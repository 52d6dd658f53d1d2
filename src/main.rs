//! Dice-elimination game simulator CLI.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                          # Default: 1000 runs with 5 dice
//!   cargo run -- -n 100000 -d 8        # 100k runs with 8 dice
//!   cargo run -- --seed 42 --parallel  # Reproducible, on all cores

use clap::Parser;
use std::process::ExitCode;
use threes::constants::{DEFAULT_DICE, DEFAULT_RUNS};
use threes::simulator::{game_rng, run_simulation, SimConfig, SimReport};
use threes::{build_info, logging, play_traced, SimError};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "threes")]
#[command(about = "Monte Carlo simulator for the dice-elimination game")]
#[command(version = build_info::VERSION_LINE)]
struct Cli {
    /// Number of games to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_RUNS)]
    runs: u64,

    /// Dice each game starts with
    #[arg(short, long, default_value_t = DEFAULT_DICE)]
    dice: u32,

    /// Base RNG seed for a reproducible batch
    #[arg(short, long)]
    seed: Option<u64>,

    /// Spread games across all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print a traced sample game and raise the log level (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print summary statistics after the score table
    #[arg(long)]
    stats: bool,

    /// Save a JSON report to sim_report_<timestamp>.json
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn verbosity(&self) -> u8 {
        self.verbose.saturating_add(1)
    }

    fn config(&self) -> SimConfig {
        SimConfig {
            num_runs: self.runs,
            num_dice: self.dice,
            seed: self.seed,
            parallel: self.parallel,
            verbosity: self.verbosity(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "simulation failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let config = cli.config();
    let report = run_simulation(&config)?;

    println!("{}", report.to_text());

    if cli.stats {
        println!();
        print!("{}", report.summary_text());
    }

    if config.verbosity >= 2 {
        // Replays game 0 of the batch with the same RNG stream.
        let mut rng = game_rng(report.seed, 0);
        println!();
        print!("{}", play_traced(config.num_dice, &mut rng).to_text());
    }

    if cli.json {
        let filename = save_json(&report)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn save_json(report: &SimReport) -> Result<String, SimError> {
    let json = report.to_json()?;
    let filename = format!(
        "sim_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    std::fs::write(&filename, json)?;
    info!(file = %filename, "wrote JSON report");
    Ok(filename)
}
