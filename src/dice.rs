//! Dice sources for the game engine.
//!
//! Any `rand::Rng` rolls fair six-sided dice. `ScriptedDice` replays a fixed
//! sequence of faces so a game can be replayed exactly.

use rand::Rng;

use crate::constants::DIE_FACES;
use crate::error::SimError;

/// Something that can roll six-sided dice.
pub trait DiceRoller {
    /// Roll one die, returning a face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Roll `count` dice independently.
    fn roll(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll_die()).collect()
    }
}

impl<R: Rng + ?Sized> DiceRoller for R {
    fn roll_die(&mut self) -> u8 {
        self.gen_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Build a script from die faces. Every face must be in `1..=6`.
    pub fn new(faces: Vec<u8>) -> Result<Self, SimError> {
        if faces.is_empty() {
            return Err(SimError::EmptyScript);
        }
        if let Some(&bad) = faces.iter().find(|&&f| f == 0 || f > DIE_FACES) {
            return Err(SimError::InvalidFace(bad));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Number of faces consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_rolls_stay_on_the_die() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rolls = rng.roll(10_000);
        assert_eq!(rolls.len(), 10_000);
        assert!(rolls.iter().all(|&r| (1..=6).contains(&r)));
    }

    #[test]
    fn test_rng_rolls_hit_every_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 6];
        for r in rng.roll(1_000) {
            seen[(r - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_dice_replay_in_order() {
        let mut dice = ScriptedDice::new(vec![3, 3, 5, 5, 5]).unwrap();
        assert_eq!(dice.roll(5), vec![3, 3, 5, 5, 5]);
        assert_eq!(dice.consumed(), 5);
    }

    #[test]
    fn test_scripted_dice_wrap_around() {
        let mut dice = ScriptedDice::new(vec![1, 2]).unwrap();
        assert_eq!(dice.roll(5), vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_scripted_dice_reject_bad_faces() {
        assert!(matches!(
            ScriptedDice::new(vec![1, 7]),
            Err(SimError::InvalidFace(7))
        ));
        assert!(matches!(
            ScriptedDice::new(vec![0]),
            Err(SimError::InvalidFace(0))
        ));
        assert!(matches!(
            ScriptedDice::new(Vec::new()),
            Err(SimError::EmptyScript)
        ));
    }
}
