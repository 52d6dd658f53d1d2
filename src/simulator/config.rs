//! Simulation configuration.

use crate::constants::{DEFAULT_DICE, DEFAULT_RUNS, QUICK_RUNS};
use crate::error::SimError;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u64,

    /// Dice each game starts with
    pub num_dice: u32,

    /// Base seed for reproducibility (None = drawn from entropy)
    pub seed: Option<u64>,

    /// Spread games across the rayon thread pool
    pub parallel: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_RUNS,
            num_dice: DEFAULT_DICE,
            seed: None,
            parallel: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    pub fn new(num_runs: u64, num_dice: u32) -> Self {
        Self {
            num_runs,
            num_dice,
            ..Default::default()
        }
    }

    /// Quick config for smoke runs
    pub fn quick() -> Self {
        Self {
            num_runs: QUICK_RUNS,
            ..Default::default()
        }
    }

    /// Reject batches that cannot be played.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_runs == 0 {
            return Err(SimError::InvalidRuns(self.num_runs));
        }
        if self.num_dice == 0 {
            return Err(SimError::InvalidDice(self.num_dice));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.num_dice, 5);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_keeps_default_dice() {
        let config = SimConfig::quick();
        assert_eq!(config.num_runs, 100);
        assert_eq!(config.num_dice, 5);
    }

    #[test]
    fn test_validate_rejects_zero_runs() {
        let err = SimConfig::new(0, 5).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidRuns(0)));
    }

    #[test]
    fn test_validate_rejects_zero_dice() {
        let err = SimConfig::new(10, 0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidDice(0)));
    }
}
