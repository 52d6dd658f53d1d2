//! Single-game rules for the dice-elimination game.
//!
//! Each round rolls every remaining die. Any 3s are taken off the board for
//! no score; otherwise the lowest die is taken off and its value is scored.

use serde::Serialize;

use crate::constants::TARGET_FACE;
use crate::dice::DiceRoller;

/// What happened to the board after one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundOutcome {
    /// `count` dice showed the target face and were removed for no score.
    Eliminated { count: u32 },
    /// No target face; the lowest die (`value`) was removed and scored.
    Scored { value: u32 },
}

impl RoundOutcome {
    /// Dice removed from the board this round.
    pub fn dice_removed(&self) -> u32 {
        match self {
            RoundOutcome::Eliminated { count } => *count,
            RoundOutcome::Scored { .. } => 1,
        }
    }

    /// Points awarded this round.
    pub fn points(&self) -> u32 {
        match self {
            RoundOutcome::Eliminated { .. } => 0,
            RoundOutcome::Scored { value } => *value,
        }
    }
}

/// One round of a traced game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub rolls: Vec<u8>,
    pub outcome: RoundOutcome,
}

/// Full history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub initial_dice: u32,
    pub rounds: Vec<RoundRecord>,
    pub final_score: u32,
}

/// Apply the round rule to one roll of the board.
///
/// An empty roll removes nothing and scores nothing; the engine never
/// produces one.
pub fn play_round(rolls: &[u8]) -> RoundOutcome {
    let threes = rolls.iter().filter(|&&r| r == TARGET_FACE).count() as u32;
    if threes > 0 {
        return RoundOutcome::Eliminated { count: threes };
    }
    match rolls.iter().min() {
        Some(&lowest) => RoundOutcome::Scored {
            value: lowest as u32,
        },
        None => RoundOutcome::Eliminated { count: 0 },
    }
}

/// Play one full game starting with `initial_dice_count` dice and return the
/// final score.
///
/// Zero dice is a game with no rounds and scores 0.
pub fn play_board_game<D: DiceRoller + ?Sized>(initial_dice_count: u32, dice: &mut D) -> u32 {
    let mut remaining = initial_dice_count;
    let mut score = 0;

    while remaining > 0 {
        let rolls = dice.roll(remaining as usize);
        let outcome = play_round(&rolls);
        remaining -= outcome.dice_removed();
        score += outcome.points();
    }

    score
}

/// Play one full game and keep every roll.
pub fn play_traced<D: DiceRoller + ?Sized>(initial_dice_count: u32, dice: &mut D) -> GameRecord {
    let mut remaining = initial_dice_count;
    let mut final_score = 0;
    let mut rounds = Vec::new();

    while remaining > 0 {
        let rolls = dice.roll(remaining as usize);
        let outcome = play_round(&rolls);
        remaining -= outcome.dice_removed();
        final_score += outcome.points();
        rounds.push(RoundRecord { rolls, outcome });
    }

    GameRecord {
        initial_dice: initial_dice_count,
        rounds,
        final_score,
    }
}

impl GameRecord {
    /// Human-readable round-by-round log.
    pub fn to_text(&self) -> String {
        let mut out = format!("Game with {} dice\n", self.initial_dice);
        for (i, round) in self.rounds.iter().enumerate() {
            let faces: Vec<String> = round.rolls.iter().map(|r| r.to_string()).collect();
            let result = match round.outcome {
                RoundOutcome::Eliminated { count } => format!("removed {count} x 3, +0"),
                RoundOutcome::Scored { value } => format!("removed lowest {value}, +{value}"),
            };
            out.push_str(&format!(
                "  Round {:2}: [{}] {}\n",
                i + 1,
                faces.join(", "),
                result
            ));
        }
        out.push_str(&format!("  Final score: {}\n", self.final_score));
        out
    }
}
