//! Batch runner: plays many games and tallies their final scores.
//!
//! Every game gets its own `ChaCha8Rng` seeded from the batch seed plus the
//! game index, so a seeded batch gives the same table whether it runs
//! sequentially or on the rayon pool.

use super::config::SimConfig;
use super::report::SimReport;
use super::table::FrequencyTable;
use crate::error::SimError;
use crate::game::play_board_game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        runs = config.num_runs,
        dice = config.num_dice,
        seed,
        parallel = config.parallel,
        "starting simulation"
    );

    let start = Instant::now();
    let table = if config.parallel {
        run_parallel(config.num_runs, config.num_dice, seed)
    } else {
        run_sequential(config.num_runs, config.num_dice, seed)
    };
    let elapsed = start.elapsed();

    info!(
        distinct_scores = table.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "simulation finished"
    );

    Ok(SimReport {
        num_runs: config.num_runs,
        num_dice: config.num_dice,
        seed,
        parallel: config.parallel,
        table,
        elapsed,
    })
}

/// RNG for game `run_idx` of a batch.
pub fn game_rng(seed: u64, run_idx: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx))
}

fn play_one(num_dice: u32, seed: u64, run_idx: u64) -> u32 {
    let mut rng = game_rng(seed, run_idx);
    let score = play_board_game(num_dice, &mut rng);
    trace!(run = run_idx, score, "game finished");
    score
}

fn run_sequential(num_runs: u64, num_dice: u32, seed: u64) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for run_idx in 0..num_runs {
        table.record(play_one(num_dice, seed, run_idx));
    }
    table
}

fn run_parallel(num_runs: u64, num_dice: u32, seed: u64) -> FrequencyTable {
    debug!(threads = rayon::current_num_threads(), "running games in parallel");
    (0..num_runs)
        .into_par_iter()
        .fold(FrequencyTable::new, |mut table, run_idx| {
            table.record(play_one(num_dice, seed, run_idx));
            table
        })
        .reduce(FrequencyTable::new, FrequencyTable::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(num_runs: u64, num_dice: u32, seed: u64) -> SimConfig {
        SimConfig {
            num_runs,
            num_dice,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_sum_to_runs() {
        let report = run_simulation(&seeded(500, 5, 42)).unwrap();
        assert_eq!(report.table.total(), 500);
        assert_eq!(report.num_runs, 500);
        assert_eq!(report.seed, 42);
    }

    #[test]
    fn test_single_game_single_die() {
        let report = run_simulation(&seeded(1, 1, 12345)).unwrap();
        assert_eq!(report.table.len(), 1);
        let (score, count) = report.table.iter().next().unwrap();
        assert_eq!(count, 1);
        assert!([0, 1, 2, 4, 5, 6].contains(&score));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = run_simulation(&seeded(200, 5, 7)).unwrap();
        let b = run_simulation(&seeded(200, 5, 7)).unwrap();
        assert_eq!(a.table, b.table);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = run_simulation(&seeded(1000, 5, 99)).unwrap();
        let parallel = run_simulation(&SimConfig {
            parallel: true,
            ..seeded(1000, 5, 99)
        })
        .unwrap();
        assert_eq!(sequential.table, parallel.table);
        assert!(parallel.parallel);
    }

    #[test]
    fn test_unseeded_run_records_its_seed() {
        let config = SimConfig {
            num_runs: 50,
            verbosity: 0,
            ..Default::default()
        };
        let first = run_simulation(&config).unwrap();
        let replay = run_simulation(&seeded(50, 5, first.seed)).unwrap();
        assert_eq!(first.table, replay.table);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            run_simulation(&seeded(0, 5, 1)),
            Err(SimError::InvalidRuns(0))
        ));
        assert!(matches!(
            run_simulation(&seeded(10, 0, 1)),
            Err(SimError::InvalidDice(0))
        ));
    }

    #[test]
    fn test_game_rng_differs_per_game() {
        use rand::Rng;
        let a: u64 = game_rng(5, 0).gen();
        let b: u64 = game_rng(5, 1).gen();
        assert_ne!(a, b);
    }
}
