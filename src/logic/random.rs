//! Randomness seam: uniform move and opponent draws.

use crate::models::{Character, GameError, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Source of the random draws a match needs. Production uses [`RngSource`];
/// tests substitute scripted implementations.
pub trait ChoiceSource {
    /// Uniformly random move, independent per call.
    fn next_move(&mut self) -> Move;

    /// Uniformly random element of a non-empty roster.
    fn next_opponent(&mut self, roster: &[Character]) -> Result<Character, GameError>;
}

/// Thread-rng backed source.
#[derive(Clone, Copy, Debug, Default)]
pub struct RngSource;

impl ChoiceSource for RngSource {
    fn next_move(&mut self) -> Move {
        match rand::thread_rng().gen_range(0..Move::ALL.len()) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }

    fn next_opponent(&mut self, roster: &[Character]) -> Result<Character, GameError> {
        roster
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(GameError::EmptyRoster)
    }
}
