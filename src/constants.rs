// Dice
pub const DIE_FACES: u8 = 6;
pub const TARGET_FACE: u8 = 3;

// Simulation defaults
pub const DEFAULT_RUNS: u64 = 1000;
pub const DEFAULT_DICE: u32 = 5;
pub const QUICK_RUNS: u64 = 100;

// Logging
pub const LOG_ENV_VAR: &str = "THREES_LOG";
