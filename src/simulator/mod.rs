//! Monte Carlo simulator for the dice-elimination game.
//!
//! Plays a batch of independent games and reports how often each final
//! score occurs:
//! - Score frequency table, ascending by score
//! - Proportion of the batch per score
//! - Wall-clock time for the whole batch

mod config;
mod report;
mod runner;
mod table;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{game_rng, run_simulation};
pub use table::FrequencyTable;
