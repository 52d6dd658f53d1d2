//! Threes - Dice-Elimination Game Simulator
//!
//! Roll every remaining die; 3s leave the board for free, otherwise the lowest
//! die leaves and scores its face. This library exposes the game rules and the
//! Monte Carlo batch runner for the `threes` binary and for tests.

pub mod build_info;
pub mod constants;
pub mod dice;
pub mod error;
pub mod game;
pub mod logging;
pub mod simulator;

pub use dice::{DiceRoller, ScriptedDice};
pub use error::SimError;
pub use game::{play_board_game, play_round, play_traced, GameRecord, RoundOutcome};
pub use simulator::{run_simulation, FrequencyTable, SimConfig, SimReport};
