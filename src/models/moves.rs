//! Move, Outcome, and Verdict for rock-paper-scissors rounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three playable moves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in display order. Used for uniform draws and UI listings.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True iff `self` beats `other` (Rock > Scissors, Paper > Rock, Scissors > Paper).
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Result of a single round, always from the player's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Resolve one round: equal moves tie, otherwise the beats-relation decides.
    pub fn resolve(player: Move, opponent: Move) -> Outcome {
        if player == opponent {
            Outcome::Tie
        } else if player.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

/// Match-level result, computed once from the final scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    PlayerWins,
    OpponentWins,
    Draw,
}

impl Verdict {
    pub fn from_scores(player_score: u32, opponent_score: u32) -> Verdict {
        use std::cmp::Ordering::*;
        match player_score.cmp(&opponent_score) {
            Greater => Verdict::PlayerWins,
            Less => Verdict::OpponentWins,
            Equal => Verdict::Draw,
        }
    }
}
